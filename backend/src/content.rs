use serde_json::{json, Value};

/// The four how-to-use steps shown on the guide view.
pub fn guide() -> Value {
    json!({
        "steps": [
            { "title": "Upload", "description": "Take a photo of your item." },
            { "title": "Advice", "description": "See if it's recyclable, compostable, or trash." },
            { "title": "Find", "description": "Locate nearby recycling centers." },
            { "title": "Dispose", "description": "Reduce waste responsibly!" }
        ],
        "note": "Our model only provides general recycling, composting, and trash \
                 recommendations based on common guidelines. Recycling rules vary by \
                 location, so check with local authorities for accuracy."
    })
}

/// Content for the about/contact view.
pub fn about() -> Value {
    json!({
        "tagline": "Smart waste disposal powered by AI.",
        "sections": [
            {
                "title": "Why it is important",
                "body": "In the United States alone, over 200 million tons of trash were \
                         generated in 2018, and 146.1 million tons of that ended up in \
                         landfills. Our mission is to reduce this waste by helping people \
                         make smarter disposal decisions. Reusing and recycling cuts the \
                         need to extract raw natural resources, saves energy, and keeps \
                         harmful materials out of landfills.",
                "link": "https://www.epa.gov/recycle"
            },
            {
                "title": "What it can classify",
                "body": "Batteries and e-waste, food waste, glass bottles and jars, \
                         cardboard and paper, clothing, metal cans and containers, \
                         plastic bottles and bags, footwear, and general trash such as \
                         masks, diapers, and toothbrushes."
            },
            {
                "title": "Technology behind the app",
                "body": "Image classification with a convolutional feature extractor, a \
                         generative language model for context-aware recycling \
                         instructions, a geographic materials-search API for drop-off \
                         locations, and object storage for consented retraining images."
            },
            {
                "title": "Data source and license",
                "body": "Contains information from the Garbage Classification (12 \
                         classes) dataset, made available under the Open Database \
                         License (ODbL)."
            }
        ]
    })
}
