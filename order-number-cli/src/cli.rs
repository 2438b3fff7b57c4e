use clap::{Parser, Subcommand};
use order_number::{
    GeneratorSettings, OrderNumberConfig, OrderNumberFormat, OrderNumberResult, normalize_prefix,
};

/// Generate and validate order numbers
#[derive(Parser, Debug)]
#[command(name = "orderno", author, version)]
pub struct Args {
    /// Log filter (trace, debug, info, warn, error); overrides RUST_LOG
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate one or more order numbers
    Generate(GenerateArgs),

    /// Generate a business order number with a seller code
    Business {
        /// Seller identifier; its last two characters become the seller code
        #[arg(short, long)]
        seller: Option<String>,
    },

    /// Check candidates against the known formats
    Validate {
        #[arg(required = true)]
        candidates: Vec<String>,
    },

    /// List the supported formats with examples
    Formats {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct GenerateArgs {
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// standard | compact | detailed
    #[arg(short, long)]
    pub format: Option<OrderNumberFormat>,

    /// Include HH-MM in detailed numbers
    #[arg(short, long)]
    pub time: bool,

    /// Sequence digit count
    #[arg(short = 'n', long)]
    pub length: Option<u32>,

    /// How many numbers to generate
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,
}

impl GenerateArgs {
    /// Overlay the flags on the settings-derived default config
    pub fn to_config(&self, settings: &GeneratorSettings) -> OrderNumberResult<OrderNumberConfig> {
        let mut config = settings.default_config();
        if let Some(prefix) = &self.prefix {
            config.prefix = normalize_prefix(prefix)?;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.time {
            config.include_time = true;
        }
        if let Some(length) = self.length {
            config = config.with_sequence_length(length)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use order_number::OrderNumberError;

    #[test]
    fn test_parse_generate() {
        let args = Args::try_parse_from([
            "orderno", "generate", "--prefix", "sh", "--format", "detailed", "--time", "-n", "3",
            "--count", "5",
        ])
        .unwrap();
        let Command::Generate(generate) = args.command else {
            panic!("expected generate");
        };
        assert_eq!(generate.count, 5);

        let config = generate.to_config(&GeneratorSettings::default()).unwrap();
        assert_eq!(config.prefix, "SH");
        assert_eq!(config.format, OrderNumberFormat::Detailed);
        assert!(config.include_time);
        assert_eq!(config.sequence_length.get(), 3);
    }

    #[test]
    fn test_generate_defaults_follow_settings() {
        let args = Args::try_parse_from(["orderno", "generate"]).unwrap();
        let Command::Generate(generate) = args.command else {
            panic!("expected generate");
        };
        assert_eq!(generate.count, 1);

        let settings = GeneratorSettings {
            prefix: "LG".into(),
            format: OrderNumberFormat::Compact,
            ..GeneratorSettings::default()
        };
        let config = generate.to_config(&settings).unwrap();
        assert_eq!(config.prefix, "LG");
        assert_eq!(config.format, OrderNumberFormat::Compact);
    }

    #[test]
    fn test_generate_rejects_bad_input() {
        assert!(Args::try_parse_from(["orderno", "generate", "--format", "fancy"]).is_err());

        let generate = GenerateArgs {
            length: Some(0),
            ..GenerateArgs::default()
        };
        assert_eq!(
            generate.to_config(&GeneratorSettings::default()),
            Err(OrderNumberError::InvalidSequenceLength(0))
        );

        let generate = GenerateArgs {
            prefix: Some("R-B".into()),
            ..GenerateArgs::default()
        };
        assert!(generate.to_config(&GeneratorSettings::default()).is_err());
    }

    #[test]
    fn test_parse_validate_and_formats() {
        let args =
            Args::try_parse_from(["orderno", "validate", "RB-20240601-0001", "nope"]).unwrap();
        match args.command {
            Command::Validate { candidates } => assert_eq!(candidates.len(), 2),
            other => panic!("unexpected {other:?}"),
        }

        assert!(Args::try_parse_from(["orderno", "validate"]).is_err());

        let args = Args::try_parse_from(["orderno", "-l", "debug", "formats", "--json"]).unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(matches!(args.command, Command::Formats { json: true }));
    }

    #[test]
    fn test_parse_business() {
        let args = Args::try_parse_from(["orderno", "business", "--seller", "seller123"]).unwrap();
        match args.command {
            Command::Business { seller } => assert_eq!(seller.as_deref(), Some("seller123")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
