use crate::meals::dto::{DailyTotals, MealRecord, MealRequest};

/// Scales a per-serving quote by the number of servings eaten.
///
/// Zero or negative servings are taken as given.
pub fn scale(req: MealRequest) -> MealRecord {
    let servings = req.servings;
    MealRecord {
        name: req.name,
        protein: req.protein_per_serving * servings,
        carbs: req.carbs_per_serving * servings,
        fat: req.fat_per_serving * servings,
        calories: req.calories_per_serving * servings,
        servings,
    }
}

/// Sums a day's meals field by field. No meals means all zeros.
pub fn totals(meals: &[MealRecord]) -> DailyTotals {
    meals.iter().fold(DailyTotals::default(), |acc, m| DailyTotals {
        total_protein: acc.total_protein + m.protein,
        total_carbs: acc.total_carbs + m.carbs,
        total_fat: acc.total_fat + m.fat,
        total_calories: acc.total_calories + m.calories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(name: &str, p: f64, c: f64, f: f64, kcal: f64, servings: f64) -> MealRequest {
        MealRequest {
            name: name.into(),
            protein_per_serving: p,
            carbs_per_serving: c,
            fat_per_serving: f,
            calories_per_serving: kcal,
            servings,
        }
    }

    #[test]
    fn scale_multiplies_every_macro_by_servings() {
        let meal = scale(quote("Oats", 5.0, 27.0, 3.0, 150.0, 2.0));
        assert_eq!(
            meal,
            MealRecord {
                name: "Oats".into(),
                protein: 10.0,
                carbs: 54.0,
                fat: 6.0,
                calories: 300.0,
                servings: 2.0,
            }
        );
    }

    #[test]
    fn scale_handles_fractional_servings() {
        let meal = scale(quote("Rice", 4.0, 45.0, 0.5, 205.0, 0.5));
        assert_eq!(meal.protein, 4.0 * 0.5);
        assert_eq!(meal.carbs, 45.0 * 0.5);
        assert_eq!(meal.fat, 0.5 * 0.5);
        assert_eq!(meal.calories, 205.0 * 0.5);
        assert_eq!(meal.servings, 0.5);
    }

    #[test]
    fn scale_accepts_zero_and_negative_servings() {
        let none = scale(quote("Air", 5.0, 5.0, 5.0, 50.0, 0.0));
        assert_eq!((none.protein, none.calories), (0.0, 0.0));

        let negative = scale(quote("Undo", 5.0, 10.0, 1.0, 80.0, -1.0));
        assert_eq!(negative.protein, -5.0);
        assert_eq!(negative.calories, -80.0);
        assert_eq!(negative.servings, -1.0);
    }

    #[test]
    fn totals_of_nothing_is_zero() {
        assert_eq!(totals(&[]), DailyTotals::default());
    }

    #[test]
    fn totals_sum_each_field() {
        let meals = vec![
            scale(quote("Oats", 5.0, 27.0, 3.0, 150.0, 2.0)),
            scale(quote("Eggs", 6.0, 0.5, 5.0, 70.0, 3.0)),
            scale(quote("Apple", 0.5, 25.0, 0.25, 95.0, 1.0)),
        ];
        let t = totals(&meals);
        assert_eq!(t.total_protein, 10.0 + 18.0 + 0.5);
        assert_eq!(t.total_carbs, 54.0 + 1.5 + 25.0);
        assert_eq!(t.total_fat, 6.0 + 15.0 + 0.25);
        assert_eq!(t.total_calories, 300.0 + 210.0 + 95.0);
    }

    #[test]
    fn totals_ignore_meal_order() {
        let mut meals = vec![
            scale(quote("A", 1.0, 2.0, 4.0, 8.0, 1.0)),
            scale(quote("B", 16.0, 32.0, 64.0, 128.0, 1.0)),
            scale(quote("C", 256.0, 512.0, 1024.0, 2048.0, 1.0)),
        ];
        let forward = totals(&meals);
        meals.reverse();
        assert_eq!(totals(&meals), forward);
    }
}
