use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "patnum",
    version,
    about = "Validate and normalize a China patent number"
)]
pub struct Cli {
    /// China patent number, optionally prefixed with CN or ZL
    #[arg(value_name = "PATNUM", allow_hyphen_values = true)]
    pub patnum: String,

    /// Print the number with a dot before the check character
    #[arg(long, visible_alias = "with-separator")]
    pub withdot: bool,
}
