use super::models::Item;

const DEMO_USERS: &[(u64, &str, &str)] = &[
    (1, "Alice Johnson", "alice.johnson@example.com"),
    (2, "Bob Smith", "bob.smith@example.com"),
    (3, "Charlie Brown", "charlie.brown@example.com"),
    (4, "Diana Prince", "diana.prince@example.com"),
    (5, "Ethan Hunt", "ethan.hunt@example.com"),
    (6, "Fiona Gallagher", "fiona.gallagher@example.com"),
    (7, "George Martin", "george.martin@example.com"),
    (8, "Hannah Abbott", "hannah.abbott@example.com"),
    (9, "Ian Malcolm", "ian.malcolm@example.com"),
    (10, "Julia Roberts", "julia.roberts@example.com"),
    (11, "Kevin Hart", "kevin.hart@example.com"),
    (12, "Laura Palmer", "laura.palmer@example.com"),
    (13, "Michael Scott", "michael.scott@example.com"),
    (14, "Nina Simone", "nina.simone@example.com"),
    (15, "Oscar Isaac", "oscar.isaac@example.com"),
    (16, "Paula Abdul", "paula.abdul@example.com"),
    (17, "Quentin Blake", "quentin.blake@example.com"),
    (18, "Rachel Green", "rachel.green@example.com"),
    (19, "Sam Wilson", "sam.wilson@example.com"),
    (20, "Tina Fey", "tina.fey@example.com"),
];

/// The demo user list shipped with the binary.
#[must_use]
pub fn builtin_catalog() -> Vec<Item> {
    DEMO_USERS
        .iter()
        .map(|&(id, name, email)| Item::new(id, name, email))
        .collect()
}
