//! Canned TheMealDB payloads used across harnesses.

use serde_json::{json, Value};

/// One meal object in TheMealDB's wire shape, with `ingredients` spread over
/// `strIngredientN` / `strMeasureN` and the remaining slots left blank.
pub fn meal(id: &str, name: &str, category: &str, area: &str, ingredients: &[(&str, &str)]) -> Value {
    let mut obj = json!({
        "idMeal": id,
        "strMeal": name,
        "strCategory": category,
        "strArea": area,
        "strInstructions": format!("Make the {name}."),
        "strMealThumb": format!("https://www.themealdb.com/images/media/meals/{id}.jpg"),
        "strYoutube": "",
        "strTags": null,
    });
    let map = obj.as_object_mut().expect("json object");
    for n in 1..=20 {
        let (ingredient, measure) = ingredients.get(n - 1).copied().unwrap_or(("", ""));
        map.insert(format!("strIngredient{n}"), json!(ingredient));
        map.insert(format!("strMeasure{n}"), json!(measure));
    }
    obj
}

pub fn pasta_meals() -> Vec<Value> {
    vec![
        meal("52982", "Spaghetti alla Carbonara", "Pasta", "Italian", &[("Spaghetti", "320g"), ("Egg Yolks", "6")]),
        meal("52844", "Lasagne", "Pasta", "Italian", &[("Minced Beef", "500g")]),
        meal("52771", "Spicy Arrabiata Penne", "Vegetarian", "Italian", &[("penne rigate", "1 pound")]),
    ]
}

pub fn chicken_meals() -> Vec<Value> {
    vec![
        meal("52772", "Teriyaki Chicken Casserole", "Chicken", "Japanese", &[("soy sauce", "3/4 cup")]),
        meal("52940", "Brown Stew Chicken", "Chicken", "Jamaican", &[("Chicken", "1 whole")]),
    ]
}

/// Overlaps `pasta_meals` on 52844 to exercise de-duplication. The copy here
/// carries a different name so tests can tell which one survived.
pub fn beef_meals() -> Vec<Value> {
    vec![
        meal("52874", "Beef and Mustard Pie", "Beef", "British", &[("Beef", "1kg")]),
        meal("52844", "Lasagne (beef search)", "Pasta", "Italian", &[("Minced Beef", "500g")]),
    ]
}
