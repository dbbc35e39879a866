//! Classification flow over a seeded dictionary.

use obscenity_rs::normalize_text;

use crate::common::fixtures::seeded_filter;

#[tokio::test]
async fn obfuscated_words_are_caught() {
    for word in ["Банан", "БАНАН", "Бананы", "Банан0", "Бaнaн", "ББааннаанн"] {
        let (filter, _store) = seeded_filter().await;
        assert!(
            filter.is_word_obscene(word).await.unwrap(),
            "{word:?} should be obscene"
        );
    }
}

#[tokio::test]
async fn unrelated_words_pass() {
    for word in ["бУнан", "Помидор", "Барбарики", "Грушевидный", "hello"] {
        let (filter, _store) = seeded_filter().await;
        assert!(
            !filter.is_word_obscene(word).await.unwrap(),
            "{word:?} should be clean"
        );
    }
}

#[tokio::test]
async fn texts_are_classified_word_by_word() {
    let (filter, _store) = seeded_filter().await;
    assert!(filter.is_text_obscene("Бананы очень вкусные").await.unwrap());

    let (filter, _store) = seeded_filter().await;
    assert!(!filter.is_text_obscene("Помидоры очень вкусные").await.unwrap());
}

#[tokio::test]
async fn csv_import_feeds_classification() {
    let (filter, _store) = seeded_filter().await;

    let imported = filter
        .import_obscene_words("Тапок,Кроссовок\nБотинок\n".as_bytes())
        .await
        .unwrap();
    assert_eq!(imported, 3);

    assert!(filter.is_word_obscene("Тапок").await.unwrap());
    assert!(filter.is_word_obscene("Ботинок0").await.unwrap());
}

#[tokio::test]
async fn similar_words_report_the_closest_entries() {
    let (filter, _store) = seeded_filter().await;

    let similar = filter.get_similar_words("грушам", 1).await.unwrap();
    let matches = &similar["грушам"];

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].0.normalized_value, "grusha");
}

#[tokio::test]
async fn normalization_survives_a_round_trip_through_the_service() {
    let (filter, _store) = seeded_filter().await;

    let normalized = filter.normalize_text("Пиво с рыбкой");
    assert_eq!(normalized, "pivo s rybkoj");
    assert_eq!(normalize_text(&normalized), normalized);
}
