//! # Animal Table
//!
//! The 25 groups of the Jogo do Bicho, each owning four consecutive tens.
//!
//! ```text
//! ┌──────┬─────────────┬─────────────────┐
//! │ id   │ name        │ tens            │
//! ├──────┼─────────────┼─────────────────┤
//! │ 01   │ Avestruz    │ 01 02 03 04     │
//! │ 02   │ Águia       │ 05 06 07 08     │
//! │ ...  │ ...         │ ...             │
//! │ 25   │ Vaca        │ 97 98 99 00     │
//! └──────┴─────────────┴─────────────────┘
//! ```
//!
//! The table order is significant: the palpite generator selects an entry
//! by its 0-based index.

/// One row of the animal table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimalEntry {
    /// Group id, 1..=25.
    pub id: u8,

    /// Portuguese animal name.
    pub name: &'static str,

    /// The four tens owned by this group. `0` stands for "00".
    pub tens: [u8; 4],
}

impl AnimalEntry {
    /// Returns true if `ten` (0..=99) belongs to this group.
    pub fn owns_ten(&self, ten: u8) -> bool {
        self.tens.contains(&ten)
    }
}

const fn entry(id: u8, name: &'static str, tens: [u8; 4]) -> AnimalEntry {
    AnimalEntry { id, name, tens }
}

/// The static animal table, ordered by id.
pub const ANIMALS: [AnimalEntry; 25] = [
    entry(1, "Avestruz", [1, 2, 3, 4]),
    entry(2, "Águia", [5, 6, 7, 8]),
    entry(3, "Burro", [9, 10, 11, 12]),
    entry(4, "Borboleta", [13, 14, 15, 16]),
    entry(5, "Cachorro", [17, 18, 19, 20]),
    entry(6, "Cabra", [21, 22, 23, 24]),
    entry(7, "Carneiro", [25, 26, 27, 28]),
    entry(8, "Camelo", [29, 30, 31, 32]),
    entry(9, "Cobra", [33, 34, 35, 36]),
    entry(10, "Coelho", [37, 38, 39, 40]),
    entry(11, "Cavalo", [41, 42, 43, 44]),
    entry(12, "Elefante", [45, 46, 47, 48]),
    entry(13, "Galo", [49, 50, 51, 52]),
    entry(14, "Gato", [53, 54, 55, 56]),
    entry(15, "Jacaré", [57, 58, 59, 60]),
    entry(16, "Leão", [61, 62, 63, 64]),
    entry(17, "Macaco", [65, 66, 67, 68]),
    entry(18, "Porco", [69, 70, 71, 72]),
    entry(19, "Pavão", [73, 74, 75, 76]),
    entry(20, "Peru", [77, 78, 79, 80]),
    entry(21, "Touro", [81, 82, 83, 84]),
    entry(22, "Tigre", [85, 86, 87, 88]),
    entry(23, "Urso", [89, 90, 91, 92]),
    entry(24, "Veado", [93, 94, 95, 96]),
    entry(25, "Vaca", [97, 98, 99, 0]),
];

/// Looks up an animal by its group id (1..=25).
pub fn by_group(id: u8) -> Option<&'static AnimalEntry> {
    ANIMALS.iter().find(|a| a.id == id)
}

/// Finds the group that owns a ten (0..=99).
pub fn owner_of_ten(ten: u8) -> Option<&'static AnimalEntry> {
    ANIMALS.iter().find(|a| a.owns_ten(ten))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_ids_are_contiguous() {
        for (idx, animal) in ANIMALS.iter().enumerate() {
            assert_eq!(animal.id as usize, idx + 1);
        }
    }

    #[test]
    fn test_tens_cover_0_to_99_exactly_once() {
        let mut seen = BTreeSet::new();
        for animal in ANIMALS.iter() {
            assert_eq!(animal.tens.len(), 4);
            for ten in animal.tens {
                assert!(ten <= 99);
                assert!(seen.insert(ten), "ten {} appears twice", ten);
            }
        }
        assert_eq!(seen.len(), 100);
        assert_eq!(seen, (0..=99).collect::<BTreeSet<u8>>());
    }

    #[test]
    fn test_lookups() {
        assert_eq!(by_group(5).map(|a| a.name), Some("Cachorro"));
        assert!(by_group(0).is_none());
        assert!(by_group(26).is_none());

        assert_eq!(owner_of_ten(0).map(|a| a.id), Some(25));
        assert_eq!(owner_of_ten(17).map(|a| a.name), Some("Cachorro"));
        assert!(owner_of_ten(100).is_none());
    }
}
