//! End-to-end scenarios through the umbrella crate.

use recipe_match::{
    EmbeddingProvider, ExistingRecipe, Fixture, IngredientRecord, IngredientSet, MatchConfig,
    MatchRequest, Matcher, RecipeCandidate, RecipeIngredientRequirement as Req,
    RecipeMatchConfig, SemanticExpander, StubEmbedder, cosine_similarity, jaccard, levenshtein,
    rank, score,
};
use std::sync::Arc;

fn set(names: &[&str]) -> IngredientSet {
    names.iter().map(|s| s.to_string()).collect()
}

fn demo_fixture(matcher: &Matcher) -> Fixture {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/demo.json");
    let mut fixture = Fixture::from_file(path).expect("demo fixture");
    fixture.embed(&**matcher.provider()).expect("embed demo catalog");
    fixture
}

#[test]
fn optional_requirements_do_not_count() {
    let requirements = vec![
        Req::required("chicken"),
        Req::required("garlic"),
        Req::optional("pasta"),
    ];
    let coverage = score(&requirements, &set(&["chicken", "garlic"]));
    assert_eq!(coverage.matched_ingredients, vec!["chicken", "garlic"]);
    assert!(coverage.missing_ingredients.is_empty());
    assert_eq!(coverage.match_percentage, 100.0);
}

#[test]
fn substring_containment_matches() {
    let coverage = score(&[Req::required("chicken")], &set(&["chicken breast"]));
    assert_eq!(coverage.match_percentage, 100.0);
}

#[test]
fn no_requirements_scores_zero() {
    assert_eq!(score(&[], &set(&["anything"])).match_percentage, 0.0);
    assert_eq!(score(&[Req::optional("salt")], &set(&["salt"])).match_percentage, 0.0);
}

#[test]
fn identical_submission_is_duplicate() -> Result<(), Box<dyn std::error::Error>> {
    let matcher = RecipeMatchConfig::default().build_matcher()?;
    let existing = vec![ExistingRecipe::new("Chicken Pasta", ["chicken", "pasta", "garlic"])];
    let verdict =
        matcher.check_duplicate("Chicken Pasta", &["chicken", "pasta", "garlic"], &existing)?;
    let hit = verdict.duplicate().expect("duplicate");
    assert_eq!(hit.title_distance, 0);
    assert_eq!(hit.ingredient_overlap, 1.0);
    Ok(())
}

#[test]
fn distant_title_is_unique() -> Result<(), Box<dyn std::error::Error>> {
    let matcher = RecipeMatchConfig::default().build_matcher()?;
    let existing = vec![ExistingRecipe::new("Beef Stew", ["beef", "potato"])];
    let verdict = matcher.check_duplicate("Chicken Pasta", &["chicken", "pasta"], &existing)?;
    assert!(!verdict.is_duplicate());
    assert!(levenshtein("chicken pasta", "beef stew") >= 3);
    Ok(())
}

#[test]
fn expansion_includes_close_catalog_entry() {
    let provider = Arc::new(StubEmbedder::default());
    let query = provider.embed("chicken").expect("embed");

    // v = 0.9 * u + sqrt(0.19) * w, with u = query / |query| and w a unit
    // vector orthogonal to u, so cos(query, v) = 0.9.
    let norm = query.iter().map(|x| x * x).sum::<f32>().sqrt();
    let u: Vec<f32> = query.iter().map(|x| x / norm).collect();
    let mut w: Vec<f32> = vec![0.0; u.len()];
    w[0] = 1.0;
    let proj = u[0];
    for (wi, ui) in w.iter_mut().zip(&u) {
        *wi -= proj * ui;
    }
    let w_norm = w.iter().map(|x| x * x).sum::<f32>().sqrt();
    let side = 0.19f32.sqrt();
    let stored: Vec<f32> = u
        .iter()
        .zip(&w)
        .map(|(ui, wi)| 0.9 * ui + side * wi / w_norm)
        .collect();

    let sim = cosine_similarity(&query, &stored).expect("same dimension");
    assert!((sim - 0.9).abs() < 1e-3, "cosine was {sim}");

    let catalog = vec![IngredientRecord::new("Chicken Breast").with_embedding(stored)];
    let expanded = SemanticExpander::new(provider)
        .expand(&["chicken"], &catalog)
        .expect("expand");
    assert!(expanded.contains("chicken breast"));
    assert!(expanded.contains("chicken"));
}

#[test]
fn rank_output_is_non_increasing_and_bounded() -> Result<(), Box<dyn std::error::Error>> {
    let user = set(&["chicken", "garlic", "rice"]);
    let recipes: Vec<RecipeCandidate> = (0..30)
        .map(|i| {
            let mut ingredients = vec![Req::required("chicken")];
            for j in 0..(i % 4) {
                ingredients.push(Req::required(format!("extra {j}")));
            }
            RecipeCandidate::new(format!("r{i}"), format!("Recipe {i}")).with_ingredients(ingredients)
        })
        .collect();
    let results = recipes
        .iter()
        .map(|r| recipe_match::score_recipe(r, &user))
        .collect();

    let ranked = rank(results, 30, 7)?;
    assert!(ranked.len() <= 7);
    assert!(
        ranked
            .windows(2)
            .all(|w| w[0].match_percentage >= w[1].match_percentage)
    );
    assert!(ranked.iter().all(|r| r.match_percentage >= 30.0));
    Ok(())
}

#[test]
fn similarity_laws_hold() {
    for (a, b) in [("garlic", "garlik"), ("", "egg"), ("crème", "creme")] {
        assert_eq!(levenshtein(a, a), 0);
        assert_eq!(levenshtein(a, b), levenshtein(b, a));
    }

    let v = [0.3f32, -1.2, 4.0];
    assert!((cosine_similarity(&v, &v).unwrap() - 1.0).abs() < 1e-6);

    let a = set(&["egg", "rice"]);
    let b = set(&["rice", "scallion", "soy sauce"]);
    assert_eq!(jaccard(&a, &b), jaccard(&b, &a));
    assert_eq!(jaccard(&a, &a), 1.0);
}

#[test]
fn demo_fixture_pantry_search() -> Result<(), Box<dyn std::error::Error>> {
    let matcher = Matcher::with_stub_provider(MatchConfig::default())?;
    let fixture = demo_fixture(&matcher);

    let req = MatchRequest::new(["Chicken Breast", "garlic"]);
    let response = matcher.match_recipes(&req, &fixture.recipes, &fixture.catalog)?;
    let ids: Vec<&str> = response.matches.iter().map(|m| m.recipe_id.as_str()).collect();
    assert_eq!(ids, vec!["garlic-chicken", "chicken-pasta"]);
    assert_eq!(response.matches[1].match_percentage, 66.67);
    assert_eq!(response.matches[1].missing_ingredients, vec!["pasta"]);
    Ok(())
}

#[test]
fn demo_fixture_aliases_cover_scallion() -> Result<(), Box<dyn std::error::Error>> {
    let matcher = Matcher::with_stub_provider(MatchConfig::default())?;
    let fixture = demo_fixture(&matcher);

    let req = MatchRequest::new(["green onion", "rice", "egg"]).with_min_match_percentage(100);
    let response = matcher.match_with_catalog(&req, &fixture.recipes, &fixture.in_memory_catalog())?;
    assert_eq!(response.total_results, 1);
    assert_eq!(response.matches[0].recipe_id, "fried-rice");
    assert_eq!(response.matches[0].cuisine.as_deref(), Some("Chinese"));
    Ok(())
}

#[test]
fn demo_fixture_duplicate_submission() -> Result<(), Box<dyn std::error::Error>> {
    let matcher = Matcher::with_stub_provider(MatchConfig::default())?;
    let fixture = demo_fixture(&matcher);

    let verdict = matcher.check_duplicate(
        "chicken pasta ",
        &["Chicken", "pasta", "garlic", "parmesan"],
        &fixture.existing_recipes(),
    )?;
    let err = verdict.into_result().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Duplicate recipe detected: similar to existing recipe 'Chicken Pasta'"
    );
    Ok(())
}
