use director_suite::{
    clean_label, extract_aspect_ratio, extract_number, is_reference_value, REFERENCE_SENTINEL,
};

#[test]
fn test_clean_label() {
    assert_eq!(clean_label("35mm (Storyteller)"), "35mm");
    assert_eq!(clean_label("White (Dark Hair)"), "White");
    assert_eq!(clean_label("Night"), "Night");
    assert_eq!(clean_label(""), "");
    assert_eq!(clean_label(REFERENCE_SENTINEL), "from reference image");
}

#[test]
fn test_extract_aspect_ratio() {
    assert_eq!(extract_aspect_ratio("2.39:1 (Anamorphic)"), "2.39:1");
    assert_eq!(extract_aspect_ratio("4:5 (Social)"), "4:5");
    assert_eq!(extract_aspect_ratio(""), "16:9");
    assert_eq!(extract_aspect_ratio(REFERENCE_SENTINEL), "16:9");
}

#[test]
fn test_extract_number() {
    assert_eq!(extract_number("ISO 1600"), Some(1600.0));
    assert_eq!(extract_number("f/5.6"), Some(5.6));
    assert_eq!(extract_number(REFERENCE_SENTINEL), None);
    assert_eq!(extract_number(""), None);
    assert_eq!(extract_number("Slow Shutter"), None);
}

#[test]
fn test_is_reference_value() {
    assert!(is_reference_value(REFERENCE_SENTINEL));
    assert!(!is_reference_value("[ Reference Image ]"));
    assert!(!is_reference_value(""));
}
