use crate::catalog::packing::{self as table, clothing_for};
use crate::models::{
    ActivityGear, ChecklistItem, ChecklistSection, Essentials, MinimalPackingList, PackingList,
    Quantities, TempBand, TripDetails, WeatherObservation,
};

const RAIN_TIP: &str = "Rain is expected - pack waterproof items";
const SUN_TIP: &str = "Hot weather - stay hydrated and protected from sun";
const HUMID_TIP: &str = "High humidity - pack breathable fabrics";

const SPACE_SAVING_TIPS: [&str; 3] = [
    "Roll clothes to save space and reduce wrinkles",
    "Use packing cubes for organization",
    "Wear bulkiest items during travel",
];

/// Conditions that pull in extra gear. Several can hold at once.
struct WeatherFlags {
    rainy: bool,
    sunny: bool,
    windy: bool,
    humid: bool,
}

impl WeatherFlags {
    fn from_observation(observation: &WeatherObservation) -> Self {
        WeatherFlags {
            rainy: observation.is_raining() || observation.cloudiness > 70.0,
            sunny: observation.temperature > 25.0,
            windy: observation.wind_speed > 10.0,
            humid: observation.humidity > 70.0,
        }
    }
}

/// Build a full packing list from the destination's current weather.
pub fn generate_packing_list(observation: &WeatherObservation, trip: &TripDetails) -> PackingList {
    let band = TempBand::from_celsius(observation.temperature);
    let flags = WeatherFlags::from_observation(observation);
    let clothing_table = clothing_for(band);

    let clothing = clothing_table
        .essential
        .iter()
        .chain(clothing_table.recommended)
        .copied()
        .collect();

    let mut weather_gear = Vec::new();
    let mut tips = Vec::new();
    if flags.rainy {
        weather_gear.extend_from_slice(table::RAINY_GEAR);
        tips.push(RAIN_TIP);
    }
    if flags.sunny {
        weather_gear.extend_from_slice(table::SUNNY_GEAR);
        tips.push(SUN_TIP);
    }
    if flags.windy {
        weather_gear.extend_from_slice(table::WINDY_GEAR);
    }
    if flags.humid {
        weather_gear.extend_from_slice(table::HUMID_GEAR);
        tips.push(HUMID_TIP);
    }

    let activity_gear = trip
        .activities
        .iter()
        .filter_map(|activity| {
            table::activity_gear(activity).map(|items| ActivityGear {
                activity: activity.trim().to_string(),
                items: items.to_vec(),
            })
        })
        .collect();

    tips.extend(duration_tips(trip.duration));
    tips.extend(SPACE_SAVING_TIPS);

    PackingList {
        temp_band: band,
        clothing,
        weather_gear,
        activity_gear,
        essentials: Essentials {
            documents: table::DOCUMENTS.to_vec(),
            toiletries: table::TOILETRIES.to_vec(),
            electronics: table::ELECTRONICS.to_vec(),
            miscellaneous: table::MISCELLANEOUS.to_vec(),
        },
        tips,
        quantities: calculate_quantities(trip.duration, band),
    }
}

fn duration_tips(duration: u32) -> [&'static str; 2] {
    if duration <= 3 {
        [
            "Short trip - pack carry-on only",
            "Limit to 3 outfit combinations",
        ]
    } else if duration <= 7 {
        [
            "Week-long trip - plan for laundry mid-trip",
            "Pack versatile pieces that mix and match",
        ]
    } else {
        [
            "Extended trip - definitely plan for laundry",
            "Consider shipping heavy items ahead",
        ]
    }
}

pub fn calculate_quantities(duration: u32, band: TempBand) -> Quantities {
    let mut tops = duration.div_ceil(2) + 1;
    let mut bottoms = duration.div_ceil(3) + 1;
    if duration > 7 {
        tops = tops.min(6);
        bottoms = bottoms.min(4);
    }

    Quantities {
        underwear: (duration + 2).min(10),
        socks: (duration + 1).min(8),
        tops,
        bottoms,
        outerwear: if band == TempBand::Cold { 2 } else { 1 },
    }
}

/// Cut a full list down to its first few items per category. Quantities are
/// kept as computed for the full trip.
pub fn minimal_mode(mut list: PackingList) -> PackingList {
    list.clothing.truncate(3);
    list.weather_gear.truncate(1);
    list.activity_gear.truncate(1);
    for gear in &mut list.activity_gear {
        gear.items.truncate(3);
    }
    list.essentials.documents.truncate(3);
    list.essentials.toiletries.truncate(3);
    list.essentials.electronics.truncate(2);
    list.essentials.miscellaneous.truncate(2);
    list.tips.truncate(3);
    list
}

/// Carry-on list. Contents and quantities are fixed per temperature band
/// whatever the trip length.
pub fn generate_minimal_list(
    observation: &WeatherObservation,
    duration: u32,
) -> MinimalPackingList {
    let band = TempBand::from_celsius(observation.temperature);

    MinimalPackingList {
        temp_band: band,
        duration,
        clothing: clothing_for(band).essential.iter().take(5).copied().collect(),
        essentials: Essentials {
            documents: table::DOCUMENTS.iter().take(3).copied().collect(),
            toiletries: table::CARRY_ON_TOILETRIES.to_vec(),
            electronics: table::CARRY_ON_ELECTRONICS.to_vec(),
            miscellaneous: Vec::new(),
        },
        tips: table::CARRY_ON_TIPS.to_vec(),
        quantities: Quantities {
            underwear: 4,
            socks: 3,
            tops: 3,
            bottoms: 2,
            outerwear: 1,
        },
    }
}

fn section(category: impl Into<String>, items: &[&'static str]) -> ChecklistSection {
    ChecklistSection {
        category: category.into(),
        items: items
            .iter()
            .map(|name| ChecklistItem {
                name: *name,
                checked: false,
            })
            .collect(),
    }
}

/// Flatten a packing list into unchecked checklist sections.
pub fn packing_checklist(list: &PackingList) -> Vec<ChecklistSection> {
    let mut sections = vec![section("Clothing", &list.clothing)];

    if !list.weather_gear.is_empty() {
        sections.push(section("Weather Gear", &list.weather_gear));
    }
    for gear in &list.activity_gear {
        sections.push(section(format!("{} Gear", gear.activity), &gear.items));
    }

    sections.push(section("Documents", &list.essentials.documents));
    sections.push(section("Toiletries", &list.essentials.toiletries));
    sections.push(section("Electronics", &list.essentials.electronics));
    sections.push(section("Miscellaneous", &list.essentials.miscellaneous));
    sections
}

/// General travel reminders plus a couple tied to current conditions.
pub fn destination_tips(observation: &WeatherObservation) -> Vec<&'static str> {
    let mut tips = vec![
        "Check visa requirements for your destination",
        "Notify your bank of travel plans",
        "Download offline maps",
    ];
    if observation.temperature > 30.0 {
        tips.push("Pack electrolyte supplements for hot weather");
    }
    if observation.is_raining() {
        tips.push("Download entertainment for indoor time");
    }
    tips
}
