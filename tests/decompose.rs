use column_typer::{decompose_company, decompose_phone, ClassifyError, CompanySplit, PhoneSplit};

const LEGAL: [&str; 3] = ["Inc.", "LLC", "Ltd"];

fn company(base: Option<&str>, suffix: Option<&str>) -> CompanySplit {
    CompanySplit {
        base_name: base.map(str::to_string),
        legal_suffix: suffix.map(str::to_string),
    }
}

#[test]
fn decompose_phone_with_calling_code() {
    assert_eq!(
        decompose_phone(Some("+91 9876543210")),
        PhoneSplit {
            country: Some("India"),
            national_number: Some("9876543210".to_string()),
        }
    );
}

#[test]
fn decompose_phone_prefers_the_shortest_calling_code() {
    // "7" (Russia) is tried before any longer prefix.
    let split = decompose_phone(Some("+7 495 123 45 67"));
    assert_eq!(split.country, Some("Russia"));
    assert_eq!(split.national_number.as_deref(), Some("4951234567"));
}

#[test]
fn decompose_phone_without_plus() {
    // Exactly ten digits: national number, no country.
    assert_eq!(decompose_phone(Some("(555) 123-4567")).national_number.as_deref(), Some("5551234567"));
    // Longer than ten digits with a known prefix.
    assert_eq!(decompose_phone(Some("44 20 7946 0958")).country, Some("UK"));
    // Short numbers are kept whole.
    assert_eq!(decompose_phone(Some("123-4567")).national_number.as_deref(), Some("1234567"));
    assert_eq!(decompose_phone(Some("n/a")), PhoneSplit::default());
    assert_eq!(decompose_phone(None), PhoneSplit::default());
}

#[test]
fn decompose_phone_unknown_code_keeps_last_ten_digits() {
    let split = decompose_phone(Some("+0099 876 543 2100"));
    assert_eq!(split.country, None);
    assert_eq!(split.national_number.as_deref(), Some("8765432100"));
}

#[test]
fn decompose_company_trims_the_base_name() {
    assert_eq!(
        decompose_company(Some("Acme Widgets, Inc."), &LEGAL).unwrap(),
        company(Some("Acme Widgets"), Some("Inc."))
    );
    assert_eq!(
        decompose_company(Some("  globex   llc "), &LEGAL).unwrap(),
        company(Some("globex"), Some("LLC"))
    );
}

#[test]
fn decompose_company_follows_reference_order() {
    let legal = ["Pvt. Ltd.", "Ltd."];
    assert_eq!(
        decompose_company(Some("Tata Pvt. Ltd."), &legal).unwrap(),
        company(Some("Tata"), Some("Pvt. Ltd."))
    );
    let reversed = ["Ltd.", "Pvt. Ltd."];
    assert_eq!(
        decompose_company(Some("Tata Pvt. Ltd."), &reversed).unwrap(),
        company(Some("Tata Pvt."), Some("Ltd."))
    );
}

#[test]
fn decompose_company_without_suffix() {
    assert_eq!(
        decompose_company(Some("Stark Industries"), &LEGAL).unwrap(),
        company(Some("Stark Industries"), None)
    );
    assert_eq!(decompose_company(None, &LEGAL).unwrap(), CompanySplit::default());
    assert_eq!(decompose_company(Some("   "), &LEGAL).unwrap(), CompanySplit::default());
}

#[test]
fn decompose_company_without_separator() {
    assert_eq!(
        decompose_company(Some("AcmeLLC"), &["LLC"]).unwrap(),
        company(Some("Acme"), Some("LLC"))
    );
    assert_eq!(
        decompose_company(Some("LLC"), &["LLC"]).unwrap(),
        company(None, Some("LLC"))
    );
}

#[test]
fn decompose_company_rejects_blank_suffixes() {
    let err = decompose_company(Some("Acme Inc."), &["Inc.", ""]).unwrap_err();
    assert!(matches!(err, ClassifyError::InvalidArgument { .. }));
}
