use crate::core::Pet;

/// Category name ascending, then pet name descending.
///
/// Missing category or name compare as `""`. Comparison is ordinal and the
/// sort is stable, so pets with equal keys keep their input order.
pub fn order_by_category_reversed(pets: &[Pet]) -> Vec<Pet> {
    let mut ordered = pets.to_vec();
    ordered.sort_by(|a, b| {
        a.category_name()
            .cmp(b.category_name())
            .then_with(|| b.display_name().cmp(a.display_name()))
    });
    ordered
}
