//! Simulation Module Tests
//!
//! Validates input parsing and the three eviction policies against
//! hand-computed traces.
//!
//! ## Test Scopes
//! - **Parser**: Whitespace stripping, digit validation, frame-count bounds.
//! - **FIFO**: Insertion-order eviction, pointer behavior on hits.
//! - **LRU**: Recency bookkeeping and least-recently-used eviction.
//! - **Optimal**: Farthest-next-use eviction and the never-recurs short-circuit.
//! - **Shared**: Trace formatting, fault accounting, determinism.

#[cfg(test)]
mod tests {
    use crate::simulation::engine::{self, fifo, lru, optimo};
    use crate::simulation::error::SimulationError;
    use crate::simulation::parser::{parse_references, sanitize_referencias};
    use crate::simulation::types::Algorithm;

    // ============================================================
    // PARSER TESTS
    // ============================================================

    #[test]
    fn test_parse_valid_references() {
        let refs = parse_references("7012030405", 3).unwrap();
        assert_eq!(refs, vec![7, 0, 1, 2, 0, 3, 0, 4, 0, 5]);
    }

    #[test]
    fn test_parse_strips_whitespace() {
        let refs = parse_references(" 70 12\t03\n", 3).unwrap();
        assert_eq!(refs, vec![7, 0, 1, 2, 0, 3]);
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        let err = parse_references("12a3", 3).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_rejects_empty_string() {
        assert!(parse_references("", 3).is_err());
        // Whitespace-only collapses to empty after sanitization
        assert!(parse_references("  \t ", 3).is_err());
    }

    #[test]
    fn test_parse_rejects_zero_frames() {
        let err = parse_references("123", 0).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }

    #[test]
    fn test_parse_rejects_more_than_ten_frames() {
        assert!(parse_references("123", 11).is_err());
        assert!(parse_references("123", 10).is_ok());
    }

    #[test]
    fn test_sanitize_referencias() {
        assert_eq!(sanitize_referencias(" 1 2 3 "), "123");
        assert_eq!(sanitize_referencias("123"), "123");
    }

    // ============================================================
    // FIFO TESTS
    // ============================================================

    #[test]
    fn test_fifo_hand_computed_trace() {
        let result = fifo("7012030405", 3).unwrap();

        assert_eq!(result.fallos, 8);
        assert_eq!(
            result.tabla,
            vec![
                vec![7, -1, -1],
                vec![7, 0, -1],
                vec![7, 0, 1],
                vec![2, 0, 1],
                vec![2, 0, 1],
                vec![2, 3, 1],
                vec![2, 3, 0],
                vec![4, 3, 0],
                vec![4, 3, 0],
                vec![4, 5, 0],
            ]
        );
    }

    #[test]
    fn test_fifo_evicts_in_insertion_order() {
        // Page 0 is referenced at step 5 (a hit), but FIFO ignores recency:
        // the next fault still overwrites the oldest insertion, which is 0.
        let result = fifo("0120314", 3).unwrap();

        // 0,1,2 inserted; 0 hit; 3 evicts 0; 1 hit; 4 evicts 1
        assert_eq!(result.tabla[4], vec![3, 1, 2]);
        assert_eq!(result.tabla[6], vec![3, 4, 2]);
        assert_eq!(result.fallos, 5);
    }

    #[test]
    fn test_fifo_hit_leaves_pointer_unchanged() {
        // After the hit at step 2, the pointer must still target slot 0.
        let result = fifo("0102", 2).unwrap();

        assert_eq!(result.tabla, vec![
            vec![0, -1],
            vec![0, 1],
            vec![0, 1],
            vec![2, 1],
        ]);
        assert_eq!(result.fallos, 3);
    }

    #[test]
    fn test_fifo_step_description_format() {
        let result = fifo("70", 3).unwrap();
        let lines: Vec<&str> = result.pasos.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Paso 1: referencia 7 => FALLO | Frames: [7, -, -]");
        assert_eq!(lines[1], "Paso 2: referencia 0 => FALLO | Frames: [7, 0, -]");
    }

    #[test]
    fn test_fifo_hit_description() {
        let result = fifo("00", 2).unwrap();
        let lines: Vec<&str> = result.pasos.lines().collect();

        assert_eq!(lines[1], "Paso 2: referencia 0 => HIT | Frames: [0, -]");
    }

    // ============================================================
    // LRU TESTS
    // ============================================================

    #[test]
    fn test_lru_hand_computed_trace() {
        let result = lru("012301", 2).unwrap();

        // Every access misses; each fault replaces the least recently used slot.
        assert_eq!(result.fallos, 6);
        assert_eq!(
            result.tabla,
            vec![
                vec![0, -1],
                vec![0, 1],
                vec![2, 1],
                vec![2, 3],
                vec![0, 3],
                vec![0, 1],
            ]
        );
    }

    #[test]
    fn test_lru_eviction_follows_recency_not_insertion() {
        let result = lru("120213", 2).unwrap();

        // The hit on 2 at step 4 refreshes it, so the fault at step 5 must
        // evict 0 (least recently used), not 2 (least recently inserted).
        assert_eq!(result.tabla[3], vec![0, 2]);
        assert_eq!(result.tabla[4], vec![1, 2]);
        assert_eq!(result.tabla[5], vec![1, 3]);
        assert_eq!(result.fallos, 5);
    }

    #[test]
    fn test_lru_fills_empty_slots_first() {
        let result = lru("012", 3).unwrap();

        assert_eq!(result.tabla, vec![
            vec![0, -1, -1],
            vec![0, 1, -1],
            vec![0, 1, 2],
        ]);
        assert_eq!(result.fallos, 3);
    }

    // ============================================================
    // OPTIMAL TESTS
    // ============================================================

    #[test]
    fn test_optimo_evicts_page_that_never_recurs() {
        let result = optimo("012202", 2).unwrap();

        // At step 3 the frames hold [0, 1]; 0 recurs at step 5 but 1 never
        // does, so 1 must be evicted even though 0 sits in a lower slot.
        assert_eq!(result.tabla[2], vec![0, 2]);
        assert_eq!(result.fallos, 3);
    }

    #[test]
    fn test_optimo_evicts_farthest_next_use() {
        let result = optimo("012013012", 3).unwrap();

        // At step 6 the next uses are 0 -> step 7, 1 -> step 8, 2 -> step 9,
        // so 2 is evicted; at step 9, 0 never recurs and goes first.
        assert_eq!(result.tabla[5], vec![0, 1, 3]);
        assert_eq!(result.tabla[8], vec![2, 1, 3]);
        assert_eq!(result.fallos, 5);
    }

    #[test]
    fn test_optimo_beats_fifo_on_belady_string() {
        let fifo_result = fifo("7012030405", 3).unwrap();
        let optimo_result = optimo("7012030405", 3).unwrap();

        assert!(optimo_result.fallos <= fifo_result.fallos);
    }

    // ============================================================
    // SHARED PROPERTIES
    // ============================================================

    #[test]
    fn test_fault_count_bounds_and_trace_agreement() {
        let referencias = "7012030405";
        for algorithm in [Algorithm::Fifo, Algorithm::Lru, Algorithm::Optimo] {
            let result = engine::run(algorithm, referencias, 3).unwrap();

            assert!(result.fallos as usize <= referencias.len());
            assert_eq!(result.tabla.len(), referencias.len());

            let fault_lines = result
                .pasos
                .lines()
                .filter(|line| line.contains("FALLO"))
                .count();
            assert_eq!(
                result.fallos as usize, fault_lines,
                "{} fault counter disagrees with trace",
                algorithm
            );
        }
    }

    #[test]
    fn test_cold_start_all_faults() {
        // Distinct pages with enough frames: every reference faults exactly once.
        let result = fifo("0123456789", 10).unwrap();
        assert_eq!(result.fallos, 10);
    }

    #[test]
    fn test_single_frame_thrashing() {
        let result = lru("0101", 1).unwrap();
        assert_eq!(result.fallos, 4);
        assert_eq!(result.tabla, vec![vec![0], vec![1], vec![0], vec![1]]);
    }

    #[test]
    fn test_simulation_is_deterministic() {
        for algorithm in [Algorithm::Fifo, Algorithm::Lru, Algorithm::Optimo] {
            let first = engine::run(algorithm, "7012030405", 3).unwrap();
            let second = engine::run(algorithm, "7012030405", 3).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_engine_propagates_invalid_input() {
        for algorithm in [Algorithm::Fifo, Algorithm::Lru, Algorithm::Optimo] {
            assert!(engine::run(algorithm, "12a3", 3).is_err());
            assert!(engine::run(algorithm, "123", 0).is_err());
        }
    }

    #[test]
    fn test_result_serialization_round_trip() {
        let result = fifo("70", 2).unwrap();

        let json = serde_json::to_string(&result).unwrap();
        let restored: crate::simulation::types::SimulationResult =
            serde_json::from_str(&json).unwrap();

        assert_eq!(restored, result);
    }
}
