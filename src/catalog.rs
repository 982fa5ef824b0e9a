//! Built-in word categories.
//!
//! The engine only ever asks a category for one random word per round;
//! UIs may also pass custom categories built at runtime.

use crate::types::Category;
use rand::seq::IndexedRandom;
use rand::Rng;

const BUILT_IN: &[(&str, &str, &str, &[&str])] = &[
    (
        "animals",
        "Animals",
        "🐾",
        &[
            "Dog", "Cat", "Elephant", "Lion", "Tiger", "Bear", "Wolf", "Eagle", "Shark", "Dolphin",
            "Penguin", "Kangaroo", "Giraffe", "Zebra", "Monkey", "Snake", "Crocodile", "Owl",
            "Rabbit", "Fox", "Deer", "Horse", "Whale", "Octopus", "Butterfly", "Frog", "Turtle",
            "Parrot", "Panda", "Koala",
        ],
    ),
    (
        "food",
        "Food",
        "🍕",
        &[
            "Pizza", "Burger", "Sushi", "Pasta", "Tacos", "Ice Cream", "Chocolate", "Salad",
            "Steak", "Soup", "Bread", "Cheese", "Rice", "Chicken", "Fish", "Apple", "Banana",
            "Orange", "Sandwich", "Cake", "Cookies", "Pancakes", "French Fries", "Hot Dog",
            "Popcorn", "Nachos", "Waffles", "Donut",
        ],
    ),
    (
        "movies",
        "Movies",
        "🎬",
        &[
            "Titanic", "Avatar", "Inception", "Matrix", "Jaws", "Frozen", "Shrek", "Batman",
            "Spiderman", "Avengers", "Joker", "Gladiator", "Rocky", "Alien", "Terminator",
            "Jurassic Park", "Star Wars", "Harry Potter", "Toy Story", "Finding Nemo",
            "The Lion King", "Forrest Gump", "Interstellar", "Coco",
        ],
    ),
    (
        "places",
        "Places",
        "🌍",
        &[
            "Beach", "Mountain", "Forest", "Desert", "City", "Airport", "Hospital", "School",
            "Restaurant", "Museum", "Library", "Park", "Mall", "Stadium", "Church", "Castle",
            "Island", "Cave", "Volcano", "Waterfall", "Zoo", "Gym", "Cinema", "Bakery", "Bank",
            "Hotel", "Farm", "Jungle", "Aquarium",
        ],
    ),
    (
        "sports",
        "Sports",
        "⚽",
        &[
            "Soccer", "Basketball", "Tennis", "Golf", "Baseball", "Swimming", "Boxing",
            "Wrestling", "Hockey", "Rugby", "Volleyball", "Skiing", "Surfing", "Cycling",
            "Running", "Gymnastics", "Karate", "Archery", "Fencing", "Bowling", "Skateboarding",
            "Snowboarding", "Badminton", "Table Tennis", "Cricket", "Rowing", "Diving", "Climbing",
        ],
    ),
    (
        "professions",
        "Jobs",
        "💼",
        &[
            "Doctor", "Teacher", "Engineer", "Chef", "Pilot", "Lawyer", "Artist", "Musician",
            "Actor", "Writer", "Nurse", "Police", "Firefighter", "Farmer", "Mechanic", "Dentist",
            "Architect", "Photographer", "Scientist", "Astronaut", "Detective", "Librarian",
            "Electrician", "Plumber", "Journalist", "Surgeon", "Veterinarian", "Carpenter",
        ],
    ),
    (
        "technology",
        "Tech",
        "💻",
        &[
            "Computer", "Smartphone", "Tablet", "Laptop", "Television", "Camera", "Headphones",
            "Keyboard", "Mouse", "Monitor", "Printer", "Router", "Drone", "Robot", "Satellite",
            "Console", "Smartwatch", "Speaker", "Microphone", "Projector", "Scanner", "Charger",
            "Battery", "Cable",
        ],
    ),
    (
        "music",
        "Music",
        "🎵",
        &[
            "Guitar", "Piano", "Drums", "Violin", "Trumpet", "Saxophone", "Flute", "Cello", "Harp",
            "Accordion", "Harmonica", "Ukulele", "Bass", "Clarinet", "Trombone", "Banjo", "Organ",
            "Synthesizer", "Tambourine", "Xylophone",
        ],
    ),
];

/// All built-in categories, in display order
pub fn default_categories() -> Vec<Category> {
    BUILT_IN
        .iter()
        .map(|(id, name, icon, words)| Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
            is_custom: false,
        })
        .collect()
}

pub fn category_by_id(id: &str) -> Option<Category> {
    default_categories().into_iter().find(|c| c.id == id)
}

impl Category {
    /// Build a user-defined category, dropping blank and duplicate words
    pub fn custom(id: &str, name: &str, icon: &str, words: &[&str]) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for word in words.iter().map(|w| w.trim()).filter(|w| !w.is_empty()) {
            if !unique.iter().any(|u| u.eq_ignore_ascii_case(word)) {
                unique.push(word.to_string());
            }
        }

        Self {
            id: id.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            words: unique,
            is_custom: true,
        }
    }

    /// Uniformly random word; `None` for an empty category
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        self.words.choose(rng).map(String::as_str)
    }
}
