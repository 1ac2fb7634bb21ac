//! Built-in 2d20 game systems.
//!
//! Hit location tables are stored as twenty entries, one per d20 face, so a
//! uniform pick reproduces the printed table's odds.

use std::collections::BTreeMap;

use super::{CustomDieTable, GameSystem, SystemImages};

/// Every built-in system.
pub fn all() -> Vec<GameSystem> {
    vec![
        conan(),
        dune(),
        fallout(),
        infinity(),
        john_carter(),
        star_trek_adventures(),
    ]
}

/// Conan: Adventures in an Age Undreamed Of.
pub fn conan() -> GameSystem {
    system(
        "conan",
        "Conan: Adventures in an Age Undreamed Of",
        [(
            "hit",
            "Hit Location",
            d20_table(&[
                (2, "Head"),
                (5, "Right Arm"),
                (8, "Left Arm"),
                (14, "Torso"),
                (17, "Right Leg"),
                (20, "Left Leg"),
            ]),
        )],
    )
}

/// Dune: Adventures in the Imperium.
pub fn dune() -> GameSystem {
    system("dune", "Dune: Adventures in the Imperium", [])
}

/// Fallout: The Roleplaying Game.
pub fn fallout() -> GameSystem {
    system(
        "fallout",
        "Fallout: The Roleplaying Game",
        [(
            "hit",
            "Hit Location",
            d20_table(&[
                (2, "Head"),
                (8, "Torso"),
                (11, "Left Arm"),
                (14, "Right Arm"),
                (17, "Left Leg"),
                (20, "Right Leg"),
            ]),
        )],
    )
}

/// Infinity.
pub fn infinity() -> GameSystem {
    system(
        "infinity",
        "Infinity",
        [(
            "hit",
            "Hit Location",
            d20_table(&[
                (2, "Head"),
                (5, "Right Arm"),
                (8, "Left Arm"),
                (14, "Torso"),
                (17, "Right Leg"),
                (20, "Left Leg"),
            ]),
        )],
    )
}

/// John Carter of Mars.
pub fn john_carter() -> GameSystem {
    system(
        "jcom",
        "John Carter of Mars",
        [(
            "hit",
            "Hit Location",
            d20_table(&[
                (2, "Head"),
                (5, "Right Arm"),
                (8, "Left Arm"),
                (14, "Body"),
                (17, "Right Leg"),
                (20, "Left Leg"),
            ]),
        )],
    )
}

/// Star Trek Adventures.
pub fn star_trek_adventures() -> GameSystem {
    system("sta", "Star Trek Adventures", [])
}

fn system<const N: usize>(
    id: &str,
    display: &str,
    tables: [(&str, &str, Vec<String>); N],
) -> GameSystem {
    let dice: BTreeMap<String, CustomDieTable> = tables
        .into_iter()
        .map(|(cmd, label, values)| {
            (
                cmd.to_string(),
                CustomDieTable {
                    display: label.to_string(),
                    values,
                },
            )
        })
        .collect();
    GameSystem {
        id: id.to_string(),
        display: display.to_string(),
        images: SystemImages {
            d6: format!("images/{id}/d6.png"),
            d20: format!("images/{id}/d20.png"),
        },
        dice,
    }
}

/// Expand `(highest face, outcome)` bands into one entry per d20 face.
fn d20_table(bands: &[(u32, &str)]) -> Vec<String> {
    let mut values = Vec::with_capacity(20);
    let mut face = 1;
    for &(upto, outcome) in bands {
        while face <= upto {
            values.push(outcome.to_string());
            face += 1;
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_tables_cover_every_face() {
        for system in all() {
            for (cmd, table) in &system.dice {
                assert_eq!(table.values.len(), 20, "{}:{cmd}", system.id);
            }
        }
    }

    #[test]
    fn conan_bands() {
        let conan = conan();
        let hit = conan.table("hit").unwrap();
        assert_eq!(hit.values[0], "Head");
        assert_eq!(hit.values[1], "Head");
        assert_eq!(hit.values[2], "Right Arm");
        assert_eq!(hit.values[13], "Torso");
        assert_eq!(hit.values[19], "Left Leg");
    }

    #[test]
    fn images_follow_id() {
        let sta = star_trek_adventures();
        assert_eq!(sta.images.d6, "images/sta/d6.png");
        assert_eq!(sta.images.d20, "images/sta/d20.png");
        assert!(sta.dice.is_empty());
    }

    #[test]
    fn ids_are_unique() {
        let systems = all();
        let mut ids: Vec<&str> = systems.iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), systems.len());
    }
}
