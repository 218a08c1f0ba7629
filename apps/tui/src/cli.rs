use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "facility-map", version, about = "Ward facility map")]
pub struct CliArgs {
    /// Print per-category stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the facility list as source text and exit
    #[arg(long)]
    pub export: bool,

    /// Print the facility list as JSON and exit
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Load facilities from a JSON file
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Initial map centre
    #[arg(long, value_name = "LAT,LNG", allow_hyphen_values = true)]
    pub center: Option<String>,

    /// Initial map width in metres
    #[arg(long, value_name = "METRES")]
    pub span: Option<String>,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(data) = &self.data {
            std::env::set_var("FACILITY_DATA", data);
        }
        if let Some(center) = &self.center {
            std::env::set_var("MAP_CENTER", center);
        }
        if let Some(span) = &self.span {
            std::env::set_var("MAP_SPAN_M", span);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    /// Whether the run ends after printing, without starting the terminal UI.
    pub const fn is_headless(&self) -> bool {
        self.headless || self.export || self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_flags_imply_headless() {
        let args = CliArgs::parse_from(["facility-map", "--export"]);
        assert!(args.is_headless());
        let args = CliArgs::parse_from(["facility-map", "--center", "43.1,141.3"]);
        assert!(!args.is_headless());
        assert_eq!(args.center.as_deref(), Some("43.1,141.3"));
    }
}
