mod common;

use blendcast::{Pair, flatten};
use common::snapshot;
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_floats_in_order() {
        let input = snapshot(json!({
            "a": 1.0,
            "b": 2,
            "c": 3.5,
        }));
        let pairs = flatten(&input);
        assert_eq!(
            pairs,
            vec![Pair::new("a", 1.0), Pair::new("c", 3.5)],
            "Only float entries should survive, in snapshot order"
        );
    }

    #[test]
    fn drops_every_non_float_type() {
        let input = snapshot(json!({
            "integer": 7,
            "negative_integer": -3,
            "string": "0.5",
            "boolean": true,
            "null": null,
            "array": [0.1, 0.2],
            "object": {"nested": 0.3},
        }));
        let pairs = flatten(&input);
        assert!(
            pairs.is_empty(),
            "Integers, strings, booleans, nulls and nested structures should all be dropped"
        );
    }

    #[test]
    fn preserves_snapshot_order_for_many_floats() {
        let input = snapshot(json!({
            "jawOpen": 0.75,
            "eyeBlinkLeft": 0.1,
            "eyeBlinkRight": 0.2,
            "mouthSmile": 0.9,
        }));
        let pairs = flatten(&input);
        let names: Vec<&str> = pairs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["jawOpen", "eyeBlinkLeft", "eyeBlinkRight", "mouthSmile"],
            "Pairs should come out in the snapshot's insertion order"
        );
    }

    #[test]
    fn empty_snapshot_flattens_to_nothing() {
        let input = snapshot(json!({}));
        assert!(flatten(&input).is_empty(), "Empty snapshot should flatten to no pairs");
    }

    #[test]
    fn does_not_mutate_the_snapshot() {
        let input = snapshot(json!({"a": 1.5, "b": "kept"}));
        let before = input.clone();
        let _ = flatten(&input);
        assert_eq!(input, before, "Flattening should never mutate its input");
    }

    #[test]
    fn values_pass_through_untransformed() {
        let input = snapshot(json!({"tiny": 1e-9, "big": 12345.678}));
        let pairs = flatten(&input);
        assert_eq!(
            pairs,
            vec![Pair::new("tiny", 1e-9), Pair::new("big", 12345.678)],
            "Float values should pass through without transformation"
        );
    }

    #[test]
    fn pair_displays_as_wire_frame() {
        let pair = Pair::new("jawOpen", 0.75);
        assert_eq!(
            pair.to_string(),
            "jawOpen 0.75",
            "Pair display should be the space-separated wire frame"
        );
    }
}
