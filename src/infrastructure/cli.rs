use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 30.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "VIEW",
        help = "Open this panel right away instead of the passcode gate, e.g. calendar"
    )]
    pub view: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["keepsake"]);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 30.0);
        assert!(cli.view.is_none());
    }

    #[test]
    fn start_view() {
        let cli = Cli::parse_from(["keepsake", "--view", "letter", "-t", "2"]);
        assert_eq!(cli.view.as_deref(), Some("letter"));
        assert_eq!(cli.tick_rate, 2.0);
    }
}
