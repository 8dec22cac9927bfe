use rstest::*;
use solviz::engine::AddressProfile;
use solviz::engine::Classifier;
use solviz::model::AddressTags;
use solviz::model::Category;

#[fixture]
fn classifier() -> Classifier {
    Classifier::with_estimated_price(100.0)
}

fn tagged(
    name: Option<&str>,
    tags: &[&str],
) -> AddressTags {
    AddressTags {
        name: name.map(str::to_string),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Test module for the balance-tier fallback
mod balance_tier_tests {
    use super::*;

    #[rstest]
    #[case(Some(100_000.01), Category::Whale)]
    #[case(Some(100_000.0), Category::Shark)]
    #[case(Some(50_000.01), Category::Shark)]
    #[case(Some(50_000.0), Category::Dolphin)]
    #[case(Some(10_000.01), Category::Dolphin)]
    #[case(Some(10_000.0), Category::Fish)]
    #[case(Some(1_000.01), Category::Fish)]
    #[case(Some(1_000.0), Category::Shrimp)]
    #[case(Some(0.0), Category::Shrimp)]
    fn usd_cutoffs_are_strict(
        classifier: Classifier,
        #[case] balance_usd: Option<f64>,
        #[case] expected: Category,
    ) {
        let profile = AddressProfile::new("Plain1111", 1.0, balance_usd, None);
        assert_eq!(classifier.classify(&profile), expected);
    }

    #[rstest]
    #[case(1_500.0, Category::Whale)]
    #[case(600.0, Category::Shark)]
    #[case(101.0, Category::Dolphin)]
    #[case(10.5, Category::Fish)]
    #[case(10.0, Category::Shrimp)]
    fn missing_usd_uses_estimated_price(
        classifier: Classifier,
        #[case] balance: f64,
        #[case] expected: Category,
    ) {
        let profile = AddressProfile::new("Plain1111", balance, None, None);
        assert_eq!(classifier.classify(&profile), expected);
    }

    #[rstest]
    fn large_native_balance_is_at_least_fish(classifier: Classifier) {
        let profile = AddressProfile::new("Plain1111", 150.0, Some(0.0), None);
        assert_eq!(classifier.classify(&profile), Category::Fish);
    }
}

/// Test module for precedence between the classification steps
mod precedence_tests {
    use super::*;

    #[rstest]
    #[case(&["exchange"], Category::Exchange)]
    #[case(&["platform"], Category::Platform)]
    #[case(&["dex"], Category::Platform)]
    #[case(&["protocol"], Category::Platform)]
    #[case(&["bridge"], Category::Bridge)]
    #[case(&["dao"], Category::Dao)]
    #[case(&["nft"], Category::Nft)]
    #[case(&["nft_project"], Category::Nft)]
    #[case(&["exchange", "dao"], Category::Exchange)]
    fn tags_map_to_categories(
        classifier: Classifier,
        #[case] tags: &[&str],
        #[case] expected: Category,
    ) {
        let t = tagged(None, tags);
        let profile = AddressProfile::new("Plain1111", 5_000.0, Some(1_000_000.0), Some(&t));
        assert_eq!(classifier.classify(&profile), expected);
    }

    #[rstest]
    fn known_table_wins_over_everything(classifier: Classifier) {
        let t = tagged(Some("pump.fun"), &["nft"]);
        let profile = AddressProfile::new("worm2ZoG2kUd4vFXhvjh93UUH596ayRfgQ2MgjNMTth", 0.0, None, Some(&t));
        assert_eq!(classifier.classify(&profile), Category::Bridge);
    }

    #[rstest]
    fn unrelated_tags_fall_through_to_name(classifier: Classifier) {
        let t = tagged(Some("Pump.fun bonding curve"), &["memecoin"]);
        let profile = AddressProfile::new("Plain1111", 0.0, None, Some(&t));
        assert_eq!(classifier.classify(&profile), Category::Platform);
    }

    #[rstest]
    #[case("7xKXbinanceHotWallet", Category::Exchange)]
    #[case("PumpVanity1111", Category::Platform)]
    #[case("ZZbridgeZZ", Category::Bridge)]
    fn address_keywords_before_balance(
        classifier: Classifier,
        #[case] address: &str,
        #[case] expected: Category,
    ) {
        let profile = AddressProfile::new(address, 10_000.0, Some(10_000_000.0), None);
        assert_eq!(classifier.classify(&profile), expected);
    }
}
