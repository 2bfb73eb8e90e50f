use std::path::PathBuf;
use std::sync::Arc;

use emojify::{
    load_catalog, load_embedder, Emojify, EmojifyConfig, MatchConfig, SemanticConfig,
};

fn data_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

fn demo_config() -> EmojifyConfig {
    let mut cfg = EmojifyConfig::default();
    cfg.semantic.lexicon_path = Some(data_path("lexicon.json").display().to_string());
    cfg.catalog.path = data_path("emoji_catalog.json").display().to_string();
    cfg
}

const INPUTS: &[&str] = &[
    "happy",
    "joyful",
    "I am happy today",
    "feeling gloomy and hungry",
    "birthday cake",
    "kitten and puppy",
    " sunshine",
    "xyzzy",
    "",
    "the",
];

#[test]
fn repeated_predictions_are_identical() {
    let emojify = Emojify::from_config(&demo_config()).unwrap();
    for text in INPUTS {
        let first = emojify.predict(text).unwrap();
        let second = emojify.predict(text).unwrap();
        assert_eq!(first, second, "unstable prediction for {text:?}");
    }
}

#[test]
fn parallel_scoring_matches_sequential() {
    let sequential = Emojify::from_config(&demo_config()).unwrap();

    let mut cfg = demo_config();
    cfg.matcher.use_parallel = true;
    let parallel = Emojify::from_config(&cfg).unwrap();

    let seq = sequential.predict_batch(INPUTS).unwrap();
    let par = parallel.predict_batch(INPUTS).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn ties_resolve_to_first_catalog_entry_in_both_modes() {
    let embedder = load_embedder(&SemanticConfig::lexicon(data_path("lexicon.json"))).unwrap();
    let catalog = emojify::parse_catalog(
        r#"{
            "grin":  { "short_name": ":grin:",          "vector": [1.0, 0.0, 0.0, 0.0, 0.0, 0.0] },
            "happy": { "short_name": ":grinning_face:", "vector": [1.0, 0.0, 0.0, 0.0, 0.0, 0.0] }
        }"#,
        None,
    )
    .unwrap();
    let catalog = Arc::new(catalog);

    for parallel in [false, true] {
        let emojify = Emojify::from_parts(
            catalog.clone(),
            embedder.clone(),
            MatchConfig::default().with_parallel(parallel),
        )
        .unwrap();
        let outcome = emojify.engine().match_text("glad").unwrap();
        assert_eq!(outcome.words[0].entry_name(), Some("grin"), "parallel={parallel}");
    }
}

#[test]
fn loading_is_memoized() {
    let cfg = SemanticConfig::lexicon(data_path("lexicon.json"));
    let a = load_embedder(&cfg).unwrap();
    let b = load_embedder(&cfg).unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    let first = Emojify::from_config(&demo_config()).unwrap();
    let second = Emojify::from_config(&demo_config()).unwrap();
    assert!(Arc::ptr_eq(first.engine().catalog(), second.engine().catalog()));
}

#[test]
fn catalog_order_follows_file_order() {
    let catalog = load_catalog(&data_path("emoji_catalog.json")).unwrap();
    let names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).take(3).collect();
    assert_eq!(names, vec!["happy", "sad", "pizza"]);
}
