use proptest::prelude::*;

use pano_types::WidgetConfig;

proptest! {
    // Equality and serialization of widget configs must not depend on the
    // order keys were inserted in; spec change detection relies on this.
    #[test]
    fn config_equality_ignores_insertion_order(
        entries in prop::collection::btree_map("[a-z]{1,10}", any::<i64>(), 1..10)
    ) {
        let pairs: Vec<(String, i64)> = entries.into_iter().collect();

        let mut forward = WidgetConfig::new();
        for (k, v) in &pairs {
            forward.insert(k.clone(), *v);
        }

        let mut reversed = WidgetConfig::new();
        for (k, v) in pairs.iter().rev() {
            reversed.insert(k.clone(), *v);
        }

        prop_assert_eq!(&forward, &reversed);
        prop_assert_eq!(
            serde_json::to_string(&forward).unwrap(),
            serde_json::to_string(&reversed).unwrap()
        );
    }

    #[test]
    fn config_inequality_on_any_value_change(
        entries in prop::collection::btree_map("[a-z]{1,10}", any::<i64>(), 1..10),
        delta in 1i64..1000
    ) {
        let pairs: Vec<(String, i64)> = entries.into_iter().collect();
        let base: WidgetConfig = pairs
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::from(*v)))
            .collect();

        let mut changed = base.clone();
        let (k, v) = &pairs[0];
        changed.insert(k.clone(), v.wrapping_add(delta));

        prop_assert_ne!(base, changed);
    }
}
