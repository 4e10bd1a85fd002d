//! Fixed classification tables for Ashta Koota scoring.
//!
//! Every table is indexed by 0-based mansion (0 = Ashwini .. 26 = Revati)
//! or 0-based sign (0 = Mesha .. 11 = Meena). The tables are pure data;
//! the scoring rules live in [`crate::kuta`].

use jyoti_engine::Body;

/// Gana (temperament) class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

/// Gana class per mansion.
pub const GANA_OF_MANSION: [Gana; 27] = [
    Gana::Deva,      // Ashwini
    Gana::Manushya,  // Bharani
    Gana::Rakshasa,  // Krittika
    Gana::Manushya,  // Rohini
    Gana::Deva,      // Mrigashira
    Gana::Manushya,  // Ardra
    Gana::Deva,      // Punarvasu
    Gana::Deva,      // Pushya
    Gana::Rakshasa,  // Ashlesha
    Gana::Rakshasa,  // Magha
    Gana::Manushya,  // Purva Phalguni
    Gana::Manushya,  // Uttara Phalguni
    Gana::Deva,      // Hasta
    Gana::Rakshasa,  // Chitra
    Gana::Deva,      // Swati
    Gana::Rakshasa,  // Vishakha
    Gana::Deva,      // Anuradha
    Gana::Rakshasa,  // Jyeshtha
    Gana::Rakshasa,  // Mula
    Gana::Manushya,  // Purva Ashadha
    Gana::Manushya,  // Uttara Ashadha
    Gana::Deva,      // Shravana
    Gana::Rakshasa,  // Dhanishtha
    Gana::Rakshasa,  // Shatabhisha
    Gana::Manushya,  // Purva Bhadrapada
    Gana::Manushya,  // Uttara Bhadrapada
    Gana::Deva,      // Revati
];

/// Nadi (pulse) class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

/// Nadi class per mansion. The classes repeat in the fixed
/// Adi-Madhya-Antya-Antya-Madhya-Adi palindromic pattern.
pub const NADI_OF_MANSION: [Nadi; 27] = [
    Nadi::Adi,
    Nadi::Madhya,
    Nadi::Antya,
    Nadi::Antya,
    Nadi::Madhya,
    Nadi::Adi,
    Nadi::Adi,
    Nadi::Madhya,
    Nadi::Antya,
    Nadi::Antya,
    Nadi::Madhya,
    Nadi::Adi,
    Nadi::Adi,
    Nadi::Madhya,
    Nadi::Antya,
    Nadi::Antya,
    Nadi::Madhya,
    Nadi::Adi,
    Nadi::Adi,
    Nadi::Madhya,
    Nadi::Antya,
    Nadi::Antya,
    Nadi::Madhya,
    Nadi::Adi,
    Nadi::Adi,
    Nadi::Madhya,
    Nadi::Antya,
];

/// Varna (class) of a nakshatra, taken from the element of the sign
/// containing the mansion's starting degree (fire Kshatriya, earth
/// Vaishya, air Shudra, water Brahmana).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Varna {
    Brahmana,
    Kshatriya,
    Vaishya,
    Shudra,
}

/// Varna class per mansion.
pub const VARNA_OF_MANSION: [Varna; 27] = [
    Varna::Kshatriya, // Ashwini (starts in Mesha)
    Varna::Kshatriya, // Bharani
    Varna::Kshatriya, // Krittika
    Varna::Vaishya,   // Rohini (starts in Vrishabha)
    Varna::Vaishya,   // Mrigashira
    Varna::Shudra,    // Ardra (starts in Mithuna)
    Varna::Shudra,    // Punarvasu
    Varna::Brahmana,  // Pushya (starts in Karka)
    Varna::Brahmana,  // Ashlesha
    Varna::Kshatriya, // Magha (starts in Simha)
    Varna::Kshatriya, // Purva Phalguni
    Varna::Kshatriya, // Uttara Phalguni
    Varna::Vaishya,   // Hasta (starts in Kanya)
    Varna::Vaishya,   // Chitra
    Varna::Shudra,    // Swati (starts in Tula)
    Varna::Shudra,    // Vishakha
    Varna::Brahmana,  // Anuradha (starts in Vrischika)
    Varna::Brahmana,  // Jyeshtha
    Varna::Kshatriya, // Mula (starts in Dhanu)
    Varna::Kshatriya, // Purva Ashadha
    Varna::Kshatriya, // Uttara Ashadha
    Varna::Vaishya,   // Shravana (starts in Makara)
    Varna::Vaishya,   // Dhanishtha
    Varna::Shudra,    // Shatabhisha (starts in Kumbha)
    Varna::Shudra,    // Purva Bhadrapada
    Varna::Brahmana,  // Uttara Bhadrapada (starts in Meena)
    Varna::Brahmana,  // Revati
];

/// Vashya (dominance) class of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VashyaClass {
    Human,
    Animal,
}

/// Vashya class per sign: the human-figure signs against the rest.
pub const VASHYA_OF_SIGN: [VashyaClass; 12] = [
    VashyaClass::Animal, // Mesha
    VashyaClass::Animal, // Vrishabha
    VashyaClass::Human,  // Mithuna
    VashyaClass::Animal, // Karka
    VashyaClass::Animal, // Simha
    VashyaClass::Human,  // Kanya
    VashyaClass::Human,  // Tula
    VashyaClass::Animal, // Vrischika
    VashyaClass::Human,  // Dhanu
    VashyaClass::Animal, // Makara
    VashyaClass::Human,  // Kumbha
    VashyaClass::Animal, // Meena
];

/// Yoni (symbol animal) of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YoniAnimal {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Monkey,
    Mongoose,
    Lion,
}

/// Yoni animal per mansion.
pub const YONI_OF_MANSION: [YoniAnimal; 27] = [
    YoniAnimal::Horse,    // Ashwini
    YoniAnimal::Elephant, // Bharani
    YoniAnimal::Sheep,    // Krittika
    YoniAnimal::Serpent,  // Rohini
    YoniAnimal::Serpent,  // Mrigashira
    YoniAnimal::Dog,      // Ardra
    YoniAnimal::Cat,      // Punarvasu
    YoniAnimal::Sheep,    // Pushya
    YoniAnimal::Cat,      // Ashlesha
    YoniAnimal::Rat,      // Magha
    YoniAnimal::Rat,      // Purva Phalguni
    YoniAnimal::Cow,      // Uttara Phalguni
    YoniAnimal::Buffalo,  // Hasta
    YoniAnimal::Tiger,    // Chitra
    YoniAnimal::Buffalo,  // Swati
    YoniAnimal::Tiger,    // Vishakha
    YoniAnimal::Deer,     // Anuradha
    YoniAnimal::Deer,     // Jyeshtha
    YoniAnimal::Dog,      // Mula
    YoniAnimal::Monkey,   // Purva Ashadha
    YoniAnimal::Mongoose, // Uttara Ashadha
    YoniAnimal::Monkey,   // Shravana
    YoniAnimal::Lion,     // Dhanishtha
    YoniAnimal::Horse,    // Shatabhisha
    YoniAnimal::Lion,     // Purva Bhadrapada
    YoniAnimal::Cow,      // Uttara Bhadrapada
    YoniAnimal::Elephant, // Revati
];

/// The seven sworn-enemy yoni pairs (score 0 either way round).
pub const YONI_ENEMIES: [(YoniAnimal, YoniAnimal); 7] = [
    (YoniAnimal::Horse, YoniAnimal::Buffalo),
    (YoniAnimal::Elephant, YoniAnimal::Lion),
    (YoniAnimal::Sheep, YoniAnimal::Monkey),
    (YoniAnimal::Serpent, YoniAnimal::Mongoose),
    (YoniAnimal::Dog, YoniAnimal::Deer),
    (YoniAnimal::Cat, YoniAnimal::Rat),
    (YoniAnimal::Cow, YoniAnimal::Tiger),
];

/// Compatible (friendly) yoni pairs (score 2 either way round).
pub const YONI_FRIENDS: [(YoniAnimal, YoniAnimal); 7] = [
    (YoniAnimal::Horse, YoniAnimal::Elephant),
    (YoniAnimal::Cow, YoniAnimal::Sheep),
    (YoniAnimal::Deer, YoniAnimal::Monkey),
    (YoniAnimal::Cat, YoniAnimal::Mongoose),
    (YoniAnimal::Lion, YoniAnimal::Tiger),
    (YoniAnimal::Rat, YoniAnimal::Dog),
    (YoniAnimal::Serpent, YoniAnimal::Buffalo),
];

/// Natural (naisargika) disposition between two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Friend,
    Neutral,
    Enemy,
}

/// BPHS natural friendship: `a`'s disposition toward `b`.
///
/// Defined for the seven classical sign lords; the relation is not
/// symmetric (Moon counts the Sun a friend, the Sun returns neutral to
/// nobody but Mercury).
pub const fn natural_relation(a: Body, b: Body) -> Relation {
    use Body::{Jupiter, Mars, Mercury, Moon, Saturn, Sun, Venus};
    match a {
        Sun => match b {
            Moon | Mars | Jupiter => Relation::Friend,
            Venus | Saturn => Relation::Enemy,
            _ => Relation::Neutral,
        },
        Moon => match b {
            Sun | Mercury => Relation::Friend,
            _ => Relation::Neutral,
        },
        Mars => match b {
            Sun | Moon | Jupiter => Relation::Friend,
            Mercury => Relation::Enemy,
            _ => Relation::Neutral,
        },
        Mercury => match b {
            Sun | Venus => Relation::Friend,
            Moon => Relation::Enemy,
            _ => Relation::Neutral,
        },
        Jupiter => match b {
            Sun | Moon | Mars => Relation::Friend,
            Mercury | Venus => Relation::Enemy,
            _ => Relation::Neutral,
        },
        Venus => match b {
            Mercury | Saturn => Relation::Friend,
            Sun | Moon => Relation::Enemy,
            _ => Relation::Neutral,
        },
        Saturn => match b {
            Mercury | Venus => Relation::Friend,
            Sun | Moon | Mars => Relation::Enemy,
            _ => Relation::Neutral,
        },
        // Nodes never rule a sign.
        _ => Relation::Neutral,
    }
}
