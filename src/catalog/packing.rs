//! Packing database: clothing per temperature band, weather gear, activity
//! gear, and the essentials every trip gets.

use crate::models::TempBand;

pub struct BandClothing {
    pub essential: &'static [&'static str],
    pub recommended: &'static [&'static str],
}

pub fn clothing_for(band: TempBand) -> &'static BandClothing {
    match band {
        TempBand::Hot => &HOT,
        TempBand::Warm => &WARM,
        TempBand::Mild => &MILD,
        TempBand::Cool => &COOL,
        TempBand::Cold => &COLD,
    }
}

static HOT: BandClothing = BandClothing {
    essential: &[
        "Light cotton t-shirts",
        "Shorts",
        "Sundress/light dress",
        "Sandals",
        "Sunglasses",
        "Sun hat/cap",
        "Swimwear",
        "Light breathable underwear",
    ],
    recommended: &[
        "Light cardigan for AC",
        "Flip flops",
        "Beach cover-up",
        "Athletic wear for exercise",
    ],
};

static WARM: BandClothing = BandClothing {
    essential: &[
        "T-shirts/casual tops",
        "Light pants/jeans",
        "Comfortable walking shoes",
        "Light jacket",
        "Sunglasses",
    ],
    recommended: &["Shorts", "Sneakers", "Layers for temperature changes"],
};

static MILD: BandClothing = BandClothing {
    essential: &[
        "Long-sleeve shirts",
        "Jeans/pants",
        "Light sweater",
        "Comfortable shoes",
        "Light jacket",
    ],
    recommended: &["Layering pieces", "Scarf", "Closed-toe shoes"],
};

static COOL: BandClothing = BandClothing {
    essential: &[
        "Warm sweaters",
        "Long pants/jeans",
        "Warm jacket",
        "Closed-toe shoes",
        "Socks",
        "Long underwear",
    ],
    recommended: &["Thermal layers", "Warm scarf", "Gloves", "Warm hat"],
};

static COLD: BandClothing = BandClothing {
    essential: &[
        "Winter coat/parka",
        "Thermal underwear",
        "Thick sweaters",
        "Warm pants",
        "Winter boots",
        "Thick socks",
        "Winter gloves",
        "Warm hat/beanie",
        "Scarf",
    ],
    recommended: &[
        "Hand warmers",
        "Face mask/balaclava",
        "Extra layers",
        "Waterproof boots",
    ],
};

pub static RAINY_GEAR: &[&str] = &[
    "Waterproof jacket/raincoat",
    "Umbrella",
    "Waterproof shoes/boots",
    "Rain pants (optional)",
    "Waterproof bag cover",
];

pub static SUNNY_GEAR: &[&str] = &[
    "Sunscreen (SPF 30+)",
    "After-sun lotion",
    "Sunglasses (UV protection)",
    "Sun hat",
    "Light, breathable clothing",
];

pub static WINDY_GEAR: &[&str] = &["Windbreaker", "Hair ties/clips", "Moisturizer (for dry skin)"];

pub static HUMID_GEAR: &[&str] = &[
    "Breathable, moisture-wicking clothing",
    "Anti-chafing products",
    "Extra deodorant",
    "Quick-dry towel",
];

/// Case-insensitive lookup in the activity gear table
pub fn activity_gear(activity: &str) -> Option<&'static [&'static str]> {
    match activity.trim().to_lowercase().as_str() {
        "beach" => Some(&[
            "Swimsuit (2-3)",
            "Beach towel",
            "Flip flops",
            "Waterproof phone case",
            "Beach bag",
            "Snorkel gear (optional)",
        ]),
        "hiking" => Some(&[
            "Hiking boots",
            "Moisture-wicking socks",
            "Backpack",
            "Water bottle",
            "Trail snacks",
            "First aid kit",
            "Map/GPS device",
            "Sunscreen",
            "Insect repellent",
        ]),
        "business" => Some(&[
            "Business suits/formal wear",
            "Dress shoes",
            "Laptop and charger",
            "Business cards",
            "Portfolio/briefcase",
            "Iron/steamer",
            "Professional accessories",
        ]),
        "adventure" => Some(&[
            "Sturdy shoes/boots",
            "Quick-dry clothing",
            "Action camera",
            "Multi-tool",
            "Headlamp/flashlight",
            "Portable charger",
        ]),
        "culture" => Some(&[
            "Comfortable walking shoes",
            "Day backpack",
            "Camera",
            "Guidebook/maps",
            "Modest clothing (for religious sites)",
            "Reusable water bottle",
        ]),
        _ => None,
    }
}

pub static DOCUMENTS: &[&str] = &[
    "Passport/ID",
    "Travel insurance documents",
    "Booking confirmations",
    "Emergency contacts list",
    "Copies of important documents",
];

pub static TOILETRIES: &[&str] = &[
    "Toothbrush and toothpaste",
    "Shampoo and conditioner",
    "Body wash/soap",
    "Deodorant",
    "Skincare products",
    "Medications (prescription)",
    "First aid kit basics",
    "Nail clipper",
    "Razor",
];

pub static ELECTRONICS: &[&str] = &[
    "Phone and charger",
    "Power bank",
    "Universal adapter",
    "Headphones",
    "Camera (optional)",
];

pub static MISCELLANEOUS: &[&str] = &[
    "Reusable water bottle",
    "Snacks for travel",
    "Book/entertainment",
    "Travel pillow",
    "Eye mask and earplugs",
    "Plastic bags (for laundry)",
    "Small daypack",
];

// Carry-on list
pub static CARRY_ON_TOILETRIES: &[&str] = &["Travel-size toiletries", "Medications"];
pub static CARRY_ON_ELECTRONICS: &[&str] = &["Phone + charger", "Power bank"];
pub static CARRY_ON_TIPS: &[&str] = &[
    "Carry-on only - pack light!",
    "Wear bulkiest items on plane",
    "Plan to do laundry",
    "Limit to one small bag",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_gear_lookup() {
        assert_eq!(activity_gear("HIKING").unwrap()[0], "Hiking boots");
        assert!(activity_gear("knitting").is_none());
    }

    #[test]
    fn test_every_band_has_at_least_five_essentials() {
        for band in [
            TempBand::Hot,
            TempBand::Warm,
            TempBand::Mild,
            TempBand::Cool,
            TempBand::Cold,
        ] {
            assert!(clothing_for(band).essential.len() >= 5, "{}", band);
        }
    }
}
