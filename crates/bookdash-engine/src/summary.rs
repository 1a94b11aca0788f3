use bookdash_types::BookRating;

pub(crate) fn total_count(records: &[BookRating]) -> usize {
    records.iter().filter(|r| r.title.is_some()).count()
}

pub(crate) fn average_rating(records: &[BookRating]) -> Option<f64> {
    let (sum, count) = records
        .iter()
        .filter_map(BookRating::known_rating)
        .fold((0.0, 0usize), |(sum, count), rating| (sum + rating, count + 1));

    if count == 0 {
        return None;
    }

    let mean = sum / count as f64;
    // Halves go to the even digit: 7.25 -> 7.2
    Some((mean * 10.0).round_ties_even() / 10.0)
}

/// Whole stars to draw next to an average rating (0..=10).
pub fn star_rating(average: f64) -> usize {
    if average.is_nan() {
        return 0;
    }
    average.round_ties_even().clamp(0.0, 10.0) as usize
}
