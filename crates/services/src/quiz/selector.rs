use rand::Rng;
use rand::seq::index;

use signs_core::model::Question;

/// Draw up to `count` distinct questions from `pool` in uniformly random order.
///
/// The result holds `min(count, pool.len())` questions; an empty pool or a
/// zero count yields an empty selection. Randomness comes only from `rng`, so
/// a seeded generator makes the draw reproducible.
pub fn select_questions<R: Rng + ?Sized>(
    pool: &[Question],
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    let amount = count.min(pool.len());
    index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use signs_core::Catalog;
    use std::collections::HashSet;

    fn pool() -> Vec<Question> {
        Catalog::builtin().questions().to_vec()
    }

    #[test]
    fn selection_len_is_capped_by_pool() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(1);
        for count in 0..=pool.len() + 3 {
            let picked = select_questions(&pool, count, &mut rng);
            assert_eq!(picked.len(), count.min(pool.len()));
        }
    }

    #[test]
    fn selection_is_distinct_members_of_pool() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(2);
        let picked = select_questions(&pool, 4, &mut rng);

        let ids: HashSet<_> = picked.iter().map(|q| q.id().clone()).collect();
        assert_eq!(ids.len(), picked.len());
        assert!(picked.iter().all(|q| pool.contains(q)));
    }

    #[test]
    fn same_seed_same_selection() {
        let pool = pool();
        let a = select_questions(&pool, 3, &mut StdRng::seed_from_u64(42));
        let b = select_questions(&pool, 3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn order_varies_across_seeds() {
        let pool = pool();
        let orders: HashSet<Vec<String>> = (0..32)
            .map(|seed| {
                select_questions(&pool, pool.len(), &mut StdRng::seed_from_u64(seed))
                    .iter()
                    .map(|q| q.id().to_string())
                    .collect()
            })
            .collect();
        assert!(orders.len() > 1);
    }

    #[test]
    fn empty_pool_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(select_questions(&[], 5, &mut rng).is_empty());
    }
}
