use rand::seq::IndexedRandom;

use shared::Label;

/// Disposal tips shown alongside a classification, one list per label.
pub fn tips(label: Label) -> &'static [&'static str] {
    match label {
        Label::Battery => &[
            "Be sure to safely wrap the batteries before disposing",
            "Store the batteries in a cool, dry place",
            "Check for any signs of bulging or damage before disposing",
            "Drop the batteries to recycle within six months, ensuring they are bagged or taped",
        ],
        Label::Biological => &[
            "Compost food scraps and yard waste when possible",
            "Never mix biological waste with recyclables",
            "Use sealed bins to prevent odor and pests",
        ],
        Label::BrownGlass => &[
            "Rinse glass bottles before recycling",
            "Remove any caps or lids",
            "Only recycle whole bottles; broken glass may not be accepted",
        ],
        Label::Cardboard => &[
            "Flatten cardboard boxes to save space",
            "Remove excess tape or labels",
            "Do not recycle wax-coated or greasy cardboard (e.g. pizza boxes)",
        ],
        Label::Clothes => &[
            "Donate gently used clothing to charity or thrift stores",
            "Recycle worn-out clothes through textile recycling programs",
            "Do not place clothing in curbside bins unless your area accepts it",
        ],
        Label::GreenGlass => &[
            "Rinse bottles to remove residue",
            "Remove metal or plastic lids before recycling",
            "Recycle only whole glass bottles, not shattered pieces",
        ],
        Label::Metal => &[
            "Rinse food and drink cans before recycling",
            "Leave labels on; most facilities can remove them",
            "Avoid recycling sharp or rusted metal in curbside bins",
        ],
        Label::Paper => &[
            "Recycle clean and dry paper only",
            "Do not recycle paper with food stains, grease, or water damage",
            "Staples and paper clips are okay; no need to remove them",
        ],
        Label::Plastic => &[
            "Rinse plastic containers before placing them in the bin",
            "Check for recycling symbols #1 or #2; most accepted curbside",
            "Leave caps on unless otherwise instructed",
        ],
        Label::Shoes => &[
            "Donate usable shoes to shelters or reuse programs",
            "Recycle worn-out shoes through brand take-back programs",
            "Do not throw shoes in curbside recycling unless accepted",
        ],
        Label::Trash => &[
            "Place dirty, contaminated, or non-recyclable items in the trash",
            "Avoid putting electronics, batteries, or hazardous waste in the trash",
            "Try to reduce trash by reusing or composting when possible",
        ],
        Label::WhiteGlass => &[
            "Rinse glass containers before recycling",
            "Remove any plastic or metal lids",
            "Recycle only whole glass bottles, not broken pieces",
        ],
    }
}

pub fn random_tip(label: Label) -> &'static str {
    let mut rng = rand::rng();
    tips(label)
        .choose(&mut rng)
        .copied()
        .unwrap_or("Check local guidelines before disposing")
}

/// The materials-search database item names for each label; the user picks
/// one of these as the specific item to find drop-off locations for.
pub fn sub_items(label: Label) -> &'static [&'static str] {
    match label {
        Label::Battery => &[
            "Alkaline Batteries",
            "Button Cell Batteries",
            "Car Batteries",
            "Lead-acid Batteries",
            "Lithium Batteries",
            "Lithium-ion Batteries",
            "Marine Batteries",
            "Nickel-cadmium Batteries",
            "Nickel-metal Hydride Batteries",
            "Nickel-zinc Batteries",
            "Silver-oxide Batteries",
            "Zinc-air Batteries",
            "Zinc-carbon Batteries",
        ],
        Label::Plastic => &[
            "#1 Plastic Bags",
            "#1 Plastic Beverage Bottles",
            "#1 Plastic Clamshells",
            "#1 Plastic Film",
            "#1 Plastic Non-Beverage Bottles",
            "#1 Plastic Trays",
            "#1 Rigid Plastics",
            "#2 Plastic Bags",
            "#2 Plastic Bottles",
            "#2 Plastic Caps",
            "#2 Plastic Clamshells",
            "#2 Plastic Film",
            "#2 Plastic Jugs - Clear",
            "#2 Plastic Jugs - Colored",
            "#2 Rigid Plastics",
            "#3 Plastic Bags",
            "#3 Plastic Bottles",
            "#3 Plastic Film",
            "#3 Rigid Plastics",
            "#4 Flexible Plastics",
            "#4 Plastic Bags",
            "#4 Plastic Bottles",
            "#4 Plastic Film",
            "#4 Rigid Plastics",
            "#5 Plastic Bags",
            "#5 Plastic Bottles",
            "#5 Plastic Caps",
            "#5 Plastic Clamshells",
            "#5 Plastic Cups",
            "#5 Plastic Film",
            "#5 Rigid Plastics",
            "#6 Plastic - Expanded",
            "#6 Plastic Bags",
            "#6 Plastic Bottles",
            "#6 Plastic Clamshells",
            "#6 Plastic Cups",
            "#6 Plastic Cups - Expanded",
            "#6 Plastic Film",
            "#6 Plastic Peanuts",
            "#6 Rigid Plastics",
            "#7 Plastic Bags",
            "#7 Plastic Bottles",
            "#7 Plastic Film",
            "#7 Rigid Plastics",
            "Acrylics",
        ],
        Label::BrownGlass => &[
            "Brown Glass Beverage Containers",
            "Brown Glass Containers",
        ],
        Label::GreenGlass => &[
            "Green Glass Beverage Containers",
            "Green Glass Containers",
        ],
        Label::WhiteGlass => &[
            "Clear Glass Beverage Containers",
            "Clear Glass Containers",
        ],
        Label::Clothes => &["Clothing"],
        Label::Shoes => &["Shoes"],
        Label::Metal => &[
            "Aerosol Cans - Full",
            "Aluminum Beverage Cans",
            "Aluminum Foil",
            "Aluminum Food Cans",
            "Aluminum Pie Plates",
            "Aluminum Trays",
            "Ferrous Metals",
            "Metal Paint Cans",
            "Metal Tags",
            "Nonferrous Metals",
            "Refrigerators",
            "Steel Cans",
            "Steel Lids",
            "Washer/Dryers",
        ],
        Label::Cardboard => &["Cardboard"],
        Label::Paper => &[
            "Corrugated Cardboard",
            "Drink Boxes",
            "Envelopes",
            "Magazines",
            "Mixed Paper",
            "Multi-wall Paper Bags",
            "Newspaper",
            "Office Paper",
            "Paper Cups",
            "Paper Labels",
            "Paper Sleeves",
            "Paperback Books",
            "Paperboard",
            "Phone Books",
            "Wet-strength Paperboard",
        ],
        Label::Biological => &["Organic Food Waste"],
        Label::Trash => &["Trash"],
    }
}
