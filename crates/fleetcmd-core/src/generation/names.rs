//! Name generation for ships and crew

use rand::Rng;

/// Random ship name, e.g. "Stellar Pioneer"
pub fn generate_ship_name(rng: &mut impl Rng) -> String {
    let prefix = SHIP_PREFIXES[rng.gen_range(0..SHIP_PREFIXES.len())];
    let suffix = SHIP_SUFFIXES[rng.gen_range(0..SHIP_SUFFIXES.len())];
    format!("{} {}", prefix, suffix)
}

/// Random crew member: (display name, rank, specialty)
pub fn generate_crew_profile(rng: &mut impl Rng) -> (String, &'static str, &'static str) {
    let given = GIVEN_NAMES[rng.gen_range(0..GIVEN_NAMES.len())];
    let family = FAMILY_NAMES[rng.gen_range(0..FAMILY_NAMES.len())];
    let (rank, title) = RANKS[rng.gen_range(0..RANKS.len())];
    let specialty = SPECIALTIES[rng.gen_range(0..SPECIALTIES.len())];
    (format!("{} {} {}", title, given, family), rank, specialty)
}

static SHIP_PREFIXES: &[&str] = &[
    "Stellar", "Nova", "Cosmic", "Astral", "Solar", "Lunar", "Orbital", "Quantum", "Nebular",
    "Radiant", "Silent", "Distant",
];

static SHIP_SUFFIXES: &[&str] = &[
    "Voyager", "Explorer", "Pioneer", "Wanderer", "Horizon", "Sentinel", "Courier", "Harbinger",
    "Meridian", "Seeker",
];

static GIVEN_NAMES: &[&str] = &[
    "Sarah", "James", "Maya", "Wei", "Yuki", "Aisha", "Pavel", "Ingrid", "Carlos", "Fatima",
    "Kwame", "Elena", "Tomas", "Priya",
];

static FAMILY_NAMES: &[&str] = &[
    "Chen", "Wilson", "Patel", "Okafor", "Tanaka", "Novak", "Alvarez", "Haddad", "Lindqvist",
    "Mensah", "Ivanova", "Kowalski",
];

// (rank, name prefix)
static RANKS: &[(&str, &str)] = &[
    ("Commander", "Cmdr."),
    ("Lieutenant", "Lt."),
    ("Ensign", "Ens."),
    ("Science Officer", "Dr."),
    ("Chief Petty Officer", "CPO"),
];

static SPECIALTIES: &[&str] = &[
    "Navigation",
    "Engineering",
    "Xenobiology",
    "Communications",
    "Medicine",
    "Tactical",
    "Astrophysics",
];
