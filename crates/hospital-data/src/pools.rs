// File: crates/hospital-data/src/pools.rs
// Summary: Fixed value pools sampled by the record generator.

pub const FIRST_NAMES: [&str; 20] = [
    "John", "Sarah", "Michael", "Emily", "Daniel", "Sophia", "David", "Olivia",
    "James", "Aisha", "Grace", "Emma", "Victor", "Amaka", "Ibrahim", "Chinedu",
    "Fatima", "Blessing", "Samuel", "Esther",
];

pub const LAST_NAMES: [&str; 20] = [
    "Smith", "Johnson", "Brown", "Davis", "Wilson", "Miller", "Taylor", "Martin",
    "Anderson", "Okafor", "Olawale", "Adeyemi", "Ogunleye", "Okoro", "Abiola",
    "Ojo", "Eze", "Oluwaseun", "Nwachukwu", "Obi",
];

pub const GENDERS: [&str; 2] = ["Male", "Female"];

pub const DISEASES: [&str; 10] = [
    "Pneumonia", "Diabetes", "Fracture", "Malaria", "Covid-19",
    "Hypertension", "Asthma", "Tuberculosis", "Typhoid", "Cancer",
];

pub const DOCTORS: [&str; 10] = [
    "Dr. Adams", "Dr. Lee", "Dr. Carter", "Dr. Patel", "Dr. Thompson",
    "Dr. Musa", "Dr. Ade", "Dr. Okeke", "Dr. Grace", "Dr. Bello",
];

/// True when `name` is "First Last" with both parts from their pools.
pub fn is_pool_name(name: &str) -> bool {
    match name.split_once(' ') {
        Some((first, last)) => FIRST_NAMES.contains(&first) && LAST_NAMES.contains(&last),
        None => false,
    }
}
