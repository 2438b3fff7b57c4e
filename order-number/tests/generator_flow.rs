use order_number::{
    FixedClock, GeneratorSettings, OrderNumberConfig, OrderNumberFormat, OrderNumberGenerator,
    detect_format, validate_order_number,
};
use regex::Regex;
use std::collections::HashSet;

fn assert_matches(pattern: &str, value: &str) {
    let re = Regex::new(pattern).expect("valid regex");
    assert!(re.is_match(value), "{value} does not match {pattern}");
}

#[test]
fn test_format_literals() {
    let generator = OrderNumberGenerator::new();

    let standard = OrderNumberConfig::new(OrderNumberFormat::Standard)
        .with_prefix("RB")
        .with_sequence_length(4)
        .unwrap();
    assert_matches(r"^RB-\d{8}-\d{4}$", &generator.generate(&standard));

    let compact = OrderNumberConfig::new(OrderNumberFormat::Compact)
        .with_prefix("RB")
        .with_sequence_length(3)
        .unwrap();
    assert_matches(r"^RB\d{6}\d{3}$", &generator.generate(&compact));

    let detailed = OrderNumberConfig::new(OrderNumberFormat::Detailed)
        .with_prefix("RB")
        .with_time(true)
        .with_sequence_length(4)
        .unwrap();
    assert_matches(
        r"^RB-\d{4}-\d{2}-\d{2}-\d{2}-\d{2}-\d{4}$",
        &generator.generate(&detailed),
    );

    let detailed_no_time = detailed.clone().with_time(false);
    assert_matches(
        r"^RB-\d{4}-\d{2}-\d{2}-\d{4}$",
        &generator.generate(&detailed_no_time),
    );
}

#[test]
fn test_standard_output_validates_for_all_prefix_lengths() {
    let generator = OrderNumberGenerator::new();
    for prefix in ["RB", "SHP", "LOGI"] {
        let config = OrderNumberConfig::default().with_prefix(prefix);
        for _ in 0..20 {
            let number = generator.generate(&config);
            assert!(validate_order_number(&number), "{number}");
            assert_eq!(detect_format(&number), Some(OrderNumberFormat::Standard));
        }
    }
}

#[test]
fn test_uniqueness_within_session() {
    let generator = OrderNumberGenerator::new();
    let config = OrderNumberConfig::default();
    let numbers: HashSet<String> = (0..99).map(|_| generator.generate(&config)).collect();
    assert_eq!(numbers.len(), 99);
    assert_eq!(generator.tracked_count(), 99);
}

#[test]
fn test_is_generated_and_clear_cache() {
    let generator = OrderNumberGenerator::new();
    let generated: Vec<String> = (0..10)
        .map(|_| generator.generate(&OrderNumberConfig::default()))
        .collect();

    for number in &generated {
        assert!(generator.is_generated(number));
    }
    assert!(!generator.is_generated("RB-20240601-0001-never"));

    generator.clear_cache();
    for number in &generated {
        assert!(!generator.is_generated(number));
    }
}

#[test]
fn test_validation_literals() {
    assert!(validate_order_number("RB-20240601-0001"));
    assert!(!validate_order_number("not-an-order"));
    assert!(validate_order_number("RB240601123"));
}

#[test]
fn test_business_number_embeds_seller_code() {
    let generator = OrderNumberGenerator::new();
    let number = generator.generate_business_order_number(Some("seller123"));
    assert_matches(r"^RB-\d{8}-23\d{4}$", &number);
    assert!(!generator.is_generated(&number));
}

#[test]
fn test_business_number_without_seller() {
    let generator = OrderNumberGenerator::new();
    let number = generator.generate_business_order_number(None);
    assert_matches(r"^RB-\d{8}-\d{4}$", &number);
    // without a seller code the shape coincides with standard
    assert!(validate_order_number(&number));
}

#[test]
fn test_settings_drive_defaults() {
    let settings = GeneratorSettings {
        prefix: "SH".into(),
        format: OrderNumberFormat::Compact,
        ..GeneratorSettings::default()
    };
    let clock = FixedClock::at(2024, 6, 1, 8, 0).expect("valid local time");
    let generator = OrderNumberGenerator::with_clock(settings, clock);

    let number = generator.generate_default();
    assert_matches(r"^SH240601\d{4}$", &number);

    let formats = generator.suggested_formats();
    assert_eq!(formats.len(), 3);
    assert_eq!(formats[0].example, "SH-20240601-0001");
    assert_eq!(formats[1].example, "SH2406010001");
    assert_eq!(formats[2].example, "SH-2024-06-01-08-00-0001");
}

#[test]
fn test_suggested_formats_serialize() {
    let clock = FixedClock::at(2024, 6, 1, 14, 30).expect("valid local time");
    let generator = OrderNumberGenerator::with_clock(GeneratorSettings::default(), clock);
    let json = serde_json::to_value(generator.suggested_formats()).unwrap();
    assert_eq!(json[0]["format"], "standard");
    assert_eq!(json[1]["format"], "compact");
    assert_eq!(json[2]["format"], "detailed");
    assert_eq!(json[2]["example"], "RB-2024-06-01-14-30-0001");
    assert!(json[0]["description"].is_string());
}
