use crate::presentation::view_models::{
    CommandResultViewModel, CreditViewModel, Guidance, HomeViewModel,
};

const TITLE: &str = "Analysing Book Rating Dataset";
const HEADING: &str = "📚 Welcome to my App";

const WELCOME: [&str; 4] = [
    "This application's purpose is to analyze a dataset about books based on Data Visualization \
     in order to develop a recommendation system, using Content and Collaborative filtering.",
    "This application aims to analyze the dashboard and collect relevant insights that can \
     contribute to building the recommendation system.",
    "The dashboard has been modelled for a target audience of young adults (18 - 35 years old), \
     so you'll find a modern, visually appealing design with an intuitive, easy-to-use interface.",
    "Please browse the Dashboard and Dataframe pages to find all features of this App.",
];

pub fn build_home(image_path: Option<String>, record_count: usize) -> HomeViewModel {
    HomeViewModel {
        title: TITLE.to_string(),
        heading: HEADING.to_string(),
        paragraphs: WELCOME.iter().map(|p| p.to_string()).collect(),
        credit: CreditViewModel {
            name: "Diele Monteiro".to_string(),
            github_url: "https://github.com/dielemonteiro".to_string(),
            linkedin_url: "https://www.linkedin.com/in/diele-monteiro/".to_string(),
        },
        image_path,
        record_count,
    }
}

pub fn present_home(
    image_path: Option<String>,
    record_count: usize,
) -> CommandResultViewModel<HomeViewModel> {
    CommandResultViewModel::new(build_home(image_path, record_count))
        .with_suggestion(Guidance::new("See the KPIs and charts").with_command("bookdash dashboard"))
        .with_suggestion(
            Guidance::new("Browse the raw rows of a country")
                .with_command("bookdash dataframe --country usa"),
        )
        .with_suggestion(Guidance::new("Explore interactively").with_command("bookdash tui"))
}
