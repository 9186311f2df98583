use super::error::SimulationError;
use super::parser::parse_references;
use super::types::{Algorithm, EMPTY_FRAME, SimulationResult};

/// Runs the requested eviction policy over a reference string.
pub fn run(
    algorithm: Algorithm,
    referencias: &str,
    marcos: usize,
) -> Result<SimulationResult, SimulationError> {
    match algorithm {
        Algorithm::Fifo => fifo(referencias, marcos),
        Algorithm::Lru => lru(referencias, marcos),
        Algorithm::Optimo => optimo(referencias, marcos),
    }
}

/// FIFO: a circular pointer walks the frame table; every fault overwrites the
/// slot under the pointer and advances it. Hits leave the pointer untouched,
/// so eviction order is strictly insertion order.
pub fn fifo(referencias: &str, marcos: usize) -> Result<SimulationResult, SimulationError> {
    let refs = parse_references(referencias, marcos)?;
    let mut frames = vec![EMPTY_FRAME; marcos];
    let mut tabla = Vec::with_capacity(refs.len());
    let mut descripcion = Vec::with_capacity(refs.len());
    let mut fifo_ptr = 0;
    let mut fallos = 0u32;

    for (i, &r) in refs.iter().enumerate() {
        let page = i32::from(r);
        let hit = frames.contains(&page);
        if !hit {
            fallos += 1;
            frames[fifo_ptr] = page;
            fifo_ptr = (fifo_ptr + 1) % marcos;
        }
        tabla.push(frames.clone());
        descripcion.push(describe_step(i, r, hit, &frames));
    }

    Ok(SimulationResult {
        fallos,
        pasos: descripcion.join("\n"),
        tabla,
    })
}

/// LRU: each slot remembers the step index of its resident page's last
/// reference. Faults fill the first empty slot, or overwrite the slot with the
/// minimum last-used index (lowest slot index wins ties).
pub fn lru(referencias: &str, marcos: usize) -> Result<SimulationResult, SimulationError> {
    let refs = parse_references(referencias, marcos)?;
    let mut frames = vec![EMPTY_FRAME; marcos];
    let mut last_used = vec![-1i64; marcos];
    let mut tabla = Vec::with_capacity(refs.len());
    let mut descripcion = Vec::with_capacity(refs.len());
    let mut fallos = 0u32;

    for (i, &r) in refs.iter().enumerate() {
        let page = i32::from(r);
        let hit = match frames.iter().position(|&f| f == page) {
            Some(idx) => {
                last_used[idx] = i as i64;
                true
            }
            None => {
                fallos += 1;
                let slot = match frames.iter().position(|&f| f == EMPTY_FRAME) {
                    Some(empty) => empty,
                    None => {
                        let mut lru_idx = 0;
                        let mut min = i64::MAX;
                        for (j, &used) in last_used.iter().enumerate() {
                            if used < min {
                                min = used;
                                lru_idx = j;
                            }
                        }
                        lru_idx
                    }
                };
                frames[slot] = page;
                last_used[slot] = i as i64;
                false
            }
        };
        tabla.push(frames.clone());
        descripcion.push(describe_step(i, r, hit, &frames));
    }

    Ok(SimulationResult {
        fallos,
        pasos: descripcion.join("\n"),
        tabla,
    })
}

/// Optimal (Belady): faults fill the first empty slot, or evict the resident
/// page whose next reference lies farthest in the future. A page that never
/// recurs is evicted immediately, short-circuiting the scan; among pages that
/// all recur, the lowest slot index wins ties.
pub fn optimo(referencias: &str, marcos: usize) -> Result<SimulationResult, SimulationError> {
    let refs = parse_references(referencias, marcos)?;
    let mut frames = vec![EMPTY_FRAME; marcos];
    let mut tabla = Vec::with_capacity(refs.len());
    let mut descripcion = Vec::with_capacity(refs.len());
    let mut fallos = 0u32;

    for (i, &r) in refs.iter().enumerate() {
        let page = i32::from(r);
        let hit = frames.contains(&page);
        if !hit {
            fallos += 1;
            let slot = match frames.iter().position(|&f| f == EMPTY_FRAME) {
                Some(empty) => empty,
                None => {
                    let mut replace_idx = 0;
                    let mut farthest = -1i64;
                    for (j, &resident) in frames.iter().enumerate() {
                        match next_use_index(&refs, resident, i + 1) {
                            None => {
                                replace_idx = j;
                                break;
                            }
                            Some(next) => {
                                if next as i64 > farthest {
                                    farthest = next as i64;
                                    replace_idx = j;
                                }
                            }
                        }
                    }
                    replace_idx
                }
            };
            frames[slot] = page;
        }
        tabla.push(frames.clone());
        descripcion.push(describe_step(i, r, hit, &frames));
    }

    Ok(SimulationResult {
        fallos,
        pasos: descripcion.join("\n"),
        tabla,
    })
}

/// Index of the next reference to `page` at or after `start`, if any.
fn next_use_index(refs: &[u8], page: i32, start: usize) -> Option<usize> {
    refs.iter()
        .enumerate()
        .skip(start)
        .find(|&(_, &r)| i32::from(r) == page)
        .map(|(idx, _)| idx)
}

fn describe_step(step: usize, page: u8, hit: bool, frames: &[i32]) -> String {
    let rendered: Vec<String> = frames
        .iter()
        .map(|&f| {
            if f == EMPTY_FRAME {
                "-".to_string()
            } else {
                f.to_string()
            }
        })
        .collect();
    format!(
        "Paso {}: referencia {} => {} | Frames: [{}]",
        step + 1,
        page,
        if hit { "HIT" } else { "FALLO" },
        rendered.join(", ")
    )
}
