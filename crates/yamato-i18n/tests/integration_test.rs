//! Integration tests for yamato-i18n crate.

use yamato_common::test_utils::init_test_logging;
use yamato_i18n::{message_ids, Locale, ReplyCatalog, Translator};

#[test]
fn test_every_locale_defines_every_message() {
    init_test_logging();

    for locale in Locale::all() {
        let translator = Translator::new(locale).unwrap();
        for id in message_ids::OVERVIEW_FIELDS
            .iter()
            .chain([&message_ids::USAGE, &message_ids::OVERVIEW_TITLE])
        {
            assert!(
                translator.message(id).is_ok(),
                "{locale} is missing '{id}'"
            );
        }
    }
}

#[test]
fn test_english_field_names_match_tracker_labels() {
    let catalog = ReplyCatalog::load(Locale::English).unwrap();
    assert_eq!(
        catalog.overview_fields,
        [
            "Rounds Played",
            "K/D Ratio",
            "Win %",
            "Wins",
            "Rating",
            "Headshot Kill Ratio",
            "Longest Kill",
        ]
    );
    assert_eq!(catalog.overview_title, "Overall Stats");
}

#[test]
fn test_usage_shares_arguments_across_locales() {
    let en = ReplyCatalog::load(Locale::English).unwrap();
    let ja = ReplyCatalog::load(Locale::Japanese).unwrap();

    let tail = "[na/eu/as/oc/sa/sea/krj] [2017-pre1/2017-pre2/2017-pre3/2017-pre4/2017-pre5] [solo/duo/squad/solo-fpp/duo-fpp/squad-fpp]`";
    assert!(en.usage.ends_with(tail));
    assert!(ja.usage.ends_with(tail));
    assert_ne!(en.usage, ja.usage);
}

#[test]
fn test_locale_from_configuration_string() {
    let locale: Locale = "ja-JP".parse().unwrap();
    assert_eq!(Translator::new(locale).unwrap().locale(), Locale::Japanese);
    assert!("xx".parse::<Locale>().is_err());
}
