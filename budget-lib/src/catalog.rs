//! Named candidate lists offered by the choice fields.

use serde::{Deserialize, Serialize};

/// A named, ordered list of candidates for one choice field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Label shown next to the field.
    pub name: String,
    /// Candidates in display order.
    pub items: Vec<String>,
}

impl Catalog {
    pub fn new<I, S>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Strip surrounding whitespace from every item.
    ///
    /// A chosen item is written back into the entry verbatim, and typed text
    /// is trimmed before matching, so padded items would not match
    /// themselves.
    pub fn trim_items(&mut self) {
        for item in &mut self.items {
            let trimmed = item.trim();
            if trimmed.len() != item.len() {
                *item = trimmed.to_string();
            }
        }
    }

    /// The catalogs shipped with the application.
    pub fn defaults() -> Vec<Catalog> {
        vec![
            Catalog::new("Produce", PRODUCE.iter().copied()),
            Catalog::new("Vehicle", VEHICLES.iter().copied()),
            Catalog::new("Animal", ANIMALS.iter().copied()),
        ]
    }
}

/// Fruit and vegetables, four per letter.
pub const PRODUCE: &[&str] = &[
    "Apple", "Apricot", "Avocado", "Artichoke",
    "Banana", "Blueberry", "Blackberry", "Broccoli",
    "Cherry", "Cantaloupe", "Carrot", "Cucumber",
    "Date", "Durian", "Daikon", "Dill",
    "Eggplant", "Elderberry", "Endive", "Escarole",
    "Fig", "Fennel", "Feijoa", "French Bean",
    "Grapes", "Gooseberry", "Garlic", "Ginger",
    "Honeydew", "Habanero", "Horseradish", "Huckleberry",
    "Indian Fig", "Iceberg Lettuce", "Italian Plum", "Ivy Gourd",
    "Jackfruit", "Jalapeno", "Jicama", "Juneberry",
    "Kale", "Kiwi", "Kumquat", "Kohlrabi",
    "Lemon", "Lime", "Lychee", "Leek",
    "Mango", "Melon", "Mulberry", "Mushroom",
    "Nectarine", "Nance", "Napa Cabbage", "New Zealand Spinach",
    "Orange", "Olive", "Onion", "Oca",
    "Papaya", "Peach", "Pineapple", "Pear",
    "Quince", "Queen Anne Cherry", "Quandong", "Quinoa Greens",
    "Raspberry", "Radish", "Rambutan", "Red Cabbage",
    "Strawberry", "Starfruit", "Spinach", "Squash",
    "Tomato", "Tangerine", "Turnip", "Tamarind",
    "Ugli Fruit", "Ube", "Ulluco", "Umbrella Fruit",
    "Vidalia Onion", "Vanilla Bean", "Velvet Apple", "Vine Tomato",
    "Watermelon", "Winter Squash", "Wax Apple", "Wild Leek",
    "Xigua", "Ximenia", "Xylocarp", "Xanthan Gum Fruit",
    "Yellow Pepper", "Yam", "Yuzu", "Yellow Watermelon",
    "Zucchini", "Ziziphus Fruit", "Zig-Zag Vine Fruit", "Zapote",
];

pub const VEHICLES: &[&str] = &[
    "Toyota Corolla", "Honda Civic", "Ford Mustang", "Chevrolet Camaro",
    "BMW 3 Series", "Mercedes-Benz C-Class", "Audi A4", "Tesla Model 3",
    "Nissan Altima", "Hyundai Elantra", "Subaru Outback", "Jeep Wrangler",
    "Kia Soul", "Volkswagen Golf", "Mazda CX-5", "Volvo XC40",
    "Lexus RX 350", "Porsche 911", "Chevrolet Silverado", "Ford F-150",
];

pub const ANIMALS: &[&str] = &[
    "Lion", "Tiger", "Elephant", "Giraffe", "Zebra",
    "Kangaroo", "Panda", "Koala", "Penguin", "Dolphin",
    "Whale", "Eagle", "Wolf", "Bear", "Fox",
    "Rabbit", "Deer", "Horse", "Camel", "Cheetah",
];
