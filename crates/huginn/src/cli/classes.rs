use clap::Parser;
use ml::DetectorConfig;

/// Print the class table of the configured model.
#[derive(Parser)]
#[clap(name = "classes")]
pub struct Classes {}

impl Classes {
    pub fn classes(self, config: &DetectorConfig) {
        let width = config.classes.len().saturating_sub(1).to_string().len();

        for (index, class) in config.classes.iter().enumerate() {
            println!("{index:>width$} {class}");
        }
    }
}
