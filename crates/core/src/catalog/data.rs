use crate::model::{
    CategoryId, OPTION_COUNT, Question, QuestionId, SignCategory, SignColor, SignId, SignShape,
    TrafficSign,
};

use super::{Catalog, CatalogError};

fn category(
    id: &str,
    name: &str,
    urdu_name: &str,
    description: &str,
    color: &str,
    icon: &str,
) -> SignCategory {
    SignCategory {
        id: CategoryId::new(id),
        name: name.to_owned(),
        urdu_name: Some(urdu_name.to_owned()),
        description: description.to_owned(),
        color: color.to_owned(),
        icon: icon.to_owned(),
    }
}

#[allow(clippy::too_many_arguments)]
fn sign(
    id: &str,
    name: &str,
    urdu_name: &str,
    description: &str,
    significance: &str,
    category_id: &str,
    image_url: &str,
    shape: SignShape,
    color: SignColor,
    keywords: &[&str],
) -> TrafficSign {
    TrafficSign {
        id: SignId::new(id),
        name: name.to_owned(),
        urdu_name: Some(urdu_name.to_owned()),
        description: description.to_owned(),
        significance: significance.to_owned(),
        category_id: CategoryId::new(category_id),
        image_url: image_url.to_owned(),
        shape,
        color,
        keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
    }
}

fn question(
    id: &str,
    sign_id: &str,
    prompt: &str,
    options: [&str; OPTION_COUNT],
    correct_option: usize,
    explanation: &str,
) -> Result<Question, CatalogError> {
    Ok(Question::new(
        QuestionId::new(id),
        SignId::new(sign_id),
        prompt,
        options.map(str::to_owned),
        correct_option,
        explanation,
    )?)
}

fn categories() -> Vec<SignCategory> {
    vec![
        category(
            "warning",
            "Warning Signs",
            "خبرداری کے نشانات",
            "Signs that warn drivers of potential hazards ahead",
            "yellow",
            "⚠️",
        ),
        category(
            "regulatory",
            "Regulatory Signs",
            "ضابطہ کار نشانات",
            "Signs that inform drivers of traffic laws and regulations",
            "red",
            "🚫",
        ),
        category(
            "informational",
            "Informational Signs",
            "معلوماتی نشانات",
            "Signs that provide helpful information to drivers",
            "blue",
            "ℹ️",
        ),
        category(
            "construction",
            "Construction Signs",
            "تعمیراتی نشانات",
            "Signs related to road work and construction zones",
            "orange",
            "🚧",
        ),
    ]
}

#[allow(clippy::too_many_lines)]
fn signs() -> Vec<TrafficSign> {
    vec![
        sign(
            "warning-sharp-curve",
            "Sharp Curve Ahead",
            "آگے تیز موڑ",
            "Warns drivers of a sharp curve in the road ahead",
            "Reduce speed and prepare for a sharp turn to avoid accidents",
            "warning",
            "https://placehold.co/300x300?text=Yellow+triangular+warning+sign+sharp+curve+ahead+black+arrow+road+symbol",
            SignShape::Triangle,
            SignColor::Yellow,
            &["curve", "turn", "bend", "sharp", "warning", "موڑ"],
        ),
        sign(
            "warning-t-intersection",
            "T-Intersection",
            "تین راہا",
            "Warns of a T-shaped intersection ahead",
            "Prepare to stop or turn as the road ahead ends",
            "warning",
            "https://placehold.co/300x300?text=Yellow+triangular+warning+sign+T+intersection+symbol+black+on+yellow",
            SignShape::Triangle,
            SignColor::Yellow,
            &["intersection", "t-junction", "crossroads", "تین راہا"],
        ),
        sign(
            "warning-pedestrian",
            "Pedestrian Crossing",
            "پیدل چلنے والوں کا راستہ",
            "Warns drivers of a pedestrian crossing ahead",
            "Slow down and watch for people crossing the road",
            "warning",
            "https://placehold.co/300x300?text=Yellow+triangular+warning+sign+pedestrian+crossing+symbol+person+walking",
            SignShape::Triangle,
            SignColor::Yellow,
            &["pedestrian", "crossing", "people", "walk", "پیدل"],
        ),
        sign(
            "warning-school",
            "School Zone",
            "اسکول کا علاقہ",
            "Warns drivers they are entering a school zone",
            "Reduce speed and be extra cautious for children",
            "warning",
            "https://placehold.co/300x300?text=Yellow+triangular+warning+sign+school+zone+children+crossing+symbol",
            SignShape::Triangle,
            SignColor::Yellow,
            &["school", "children", "students", "اسکول", "بچے"],
        ),
        sign(
            "warning-steep-hill",
            "Steep Hill",
            "کھڑی چڑھائی",
            "Warns of a steep upward or downward grade",
            "Use appropriate gear and maintain safe following distance",
            "warning",
            "https://placehold.co/300x300?text=Yellow+triangular+warning+sign+steep+hill+grade+percentage+symbol",
            SignShape::Triangle,
            SignColor::Yellow,
            &["hill", "steep", "grade", "slope", "چڑھائی"],
        ),
        sign(
            "regulatory-stop",
            "Stop Sign",
            "رک جائیں",
            "Requires drivers to come to a complete stop",
            "Must stop completely before proceeding, regardless of traffic",
            "regulatory",
            "https://placehold.co/300x300?text=Red+octagonal+stop+sign+white+STOP+text+regulatory+traffic+control",
            SignShape::Octagon,
            SignColor::Red,
            &["stop", "halt", "complete stop", "رک", "توقف"],
        ),
        sign(
            "regulatory-give-way",
            "Give Way",
            "راستہ دیں",
            "Requires drivers to yield right of way to other traffic",
            "Must give priority to traffic on the main road",
            "regulatory",
            "https://placehold.co/300x300?text=White+triangular+give+way+sign+red+border+inverted+triangle+yield",
            SignShape::Triangle,
            SignColor::White,
            &["yield", "give way", "priority", "راستہ", "اولیت"],
        ),
        sign(
            "regulatory-no-entry",
            "No Entry",
            "داخلہ ممنوع",
            "Prohibits entry for all vehicles",
            "Vehicles are not allowed to enter this road or area",
            "regulatory",
            "https://placehold.co/300x300?text=Red+circular+no+entry+sign+white+horizontal+bar+prohibition+symbol",
            SignShape::Circle,
            SignColor::Red,
            &["no entry", "prohibited", "forbidden", "ممنوع", "داخلہ"],
        ),
        sign(
            "regulatory-speed-60",
            "Speed Limit 60",
            "۶۰ کی رفتار کی حد",
            "Maximum speed limit of 60 km/h",
            "Do not exceed 60 kilometers per hour",
            "regulatory",
            "https://placehold.co/300x300?text=White+circular+speed+limit+sign+red+border+60+black+text+kmh",
            SignShape::Circle,
            SignColor::White,
            &["speed limit", "60", "kmh", "maximum", "رفتار", "حد"],
        ),
        sign(
            "regulatory-no-parking",
            "No Parking",
            "پارکنگ ممنوع",
            "Parking is prohibited in this area",
            "Vehicles cannot be parked here at any time",
            "regulatory",
            "https://placehold.co/300x300?text=Red+circular+no+parking+sign+white+P+with+diagonal+line+prohibition",
            SignShape::Circle,
            SignColor::Red,
            &["no parking", "prohibited", "P", "پارکنگ", "ممنوع"],
        ),
        sign(
            "regulatory-one-way",
            "One Way",
            "یک طرفہ",
            "Traffic flows in one direction only",
            "Vehicles must travel only in the indicated direction",
            "regulatory",
            "https://placehold.co/300x300?text=Blue+rectangular+one+way+sign+white+arrow+directional+traffic+flow",
            SignShape::Rectangle,
            SignColor::Blue,
            &["one way", "direction", "arrow", "یک طرفہ", "سمت"],
        ),
        sign(
            "info-hospital",
            "Hospital",
            "ہسپتال",
            "Indicates location of a hospital",
            "Medical facilities are available in this direction",
            "informational",
            "https://placehold.co/300x300?text=Blue+square+hospital+sign+white+H+medical+cross+symbol+healthcare",
            SignShape::Square,
            SignColor::Blue,
            &["hospital", "medical", "health", "H", "ہسپتال"],
        ),
        sign(
            "info-fuel-station",
            "Fuel Station",
            "پیٹرول پمپ",
            "Indicates location of a fuel station",
            "Gasoline and diesel are available here",
            "informational",
            "https://placehold.co/300x300?text=Blue+square+fuel+station+sign+white+gas+pump+symbol+petrol+diesel",
            SignShape::Square,
            SignColor::Blue,
            &["fuel", "gas", "petrol", "diesel", "پیٹرول"],
        ),
        sign(
            "info-rest-area",
            "Rest Area",
            "آرام گاہ",
            "Indicates a rest area or parking facility",
            "Rest facilities and parking available",
            "informational",
            "https://placehold.co/300x300?text=Blue+square+rest+area+sign+white+bed+symbol+parking+facilities",
            SignShape::Square,
            SignColor::Blue,
            &["rest", "parking", "facilities", "آرام", "پارکنگ"],
        ),
        sign(
            "info-tourist",
            "Tourist Information",
            "سیاحتی معلومات",
            "Indicates tourist information center",
            "Tourist guidance and information available",
            "informational",
            "https://placehold.co/300x300?text=Blue+square+tourist+info+sign+white+i+information+symbol+tourism",
            SignShape::Square,
            SignColor::Blue,
            &["tourist", "information", "guidance", "سیاحت", "معلومات"],
        ),
        sign(
            "info-mosque",
            "Mosque",
            "مسجد",
            "Indicates location of a mosque",
            "Islamic worship place available",
            "informational",
            "https://placehold.co/300x300?text=Blue+square+mosque+sign+white+crescent+minaret+symbol+islamic+worship",
            SignShape::Square,
            SignColor::Blue,
            &["mosque", "worship", "islamic", "prayer", "مسجد"],
        ),
        sign(
            "construction-road-work",
            "Road Work Ahead",
            "آگے سڑک کا کام",
            "Construction or maintenance work ahead",
            "Reduce speed and be prepared for changed traffic patterns",
            "construction",
            "https://placehold.co/300x300?text=Orange+diamond+road+work+sign+black+worker+shovel+symbol+construction",
            SignShape::Diamond,
            SignColor::Orange,
            &["construction", "work", "maintenance", "تعمیر", "کام"],
        ),
        sign(
            "construction-detour",
            "Detour",
            "متبادل راستہ",
            "Traffic must follow alternate route",
            "Follow the indicated path to bypass construction",
            "construction",
            "https://placehold.co/300x300?text=Orange+rectangular+detour+sign+black+arrow+alternate+route+construction",
            SignShape::Rectangle,
            SignColor::Orange,
            &["detour", "alternate", "bypass", "route", "متبادل"],
        ),
        sign(
            "construction-lane-closure",
            "Lane Closure",
            "لین بند",
            "One or more lanes are closed ahead",
            "Merge into open lanes and reduce speed",
            "construction",
            "https://placehold.co/300x300?text=Orange+diamond+lane+closure+sign+black+merge+arrow+symbol+traffic",
            SignShape::Diamond,
            SignColor::Orange,
            &["lane", "closure", "merge", "closed", "لین", "بند"],
        ),
        sign(
            "construction-flagman",
            "Flagman Ahead",
            "آگے ٹریفک کنٹرولر",
            "Traffic control person ahead",
            "Follow signals from traffic control person",
            "construction",
            "https://placehold.co/300x300?text=Orange+diamond+flagman+sign+black+person+flag+symbol+traffic+control",
            SignShape::Diamond,
            SignColor::Orange,
            &["flagman", "control", "person", "signal", "کنٹرولر"],
        ),
    ]
}

fn questions() -> Result<Vec<Question>, CatalogError> {
    Ok(vec![
        question(
            "q1",
            "regulatory-stop",
            "What should you do when you see this sign?",
            ["Slow down", "Come to complete stop", "Yield to traffic", "Proceed with caution"],
            1,
            "A stop sign requires you to come to a complete stop before proceeding.",
        )?,
        question(
            "q2",
            "warning-pedestrian",
            "What does this warning sign indicate?",
            ["School zone ahead", "Pedestrian crossing ahead", "Construction zone", "Sharp curve"],
            1,
            "This sign warns drivers that there is a pedestrian crossing ahead.",
        )?,
        question(
            "q3",
            "regulatory-give-way",
            "What must you do when you see this sign?",
            ["Stop completely", "Speed up", "Give way to other traffic", "Turn around"],
            2,
            "Give way sign means you must yield right of way to other traffic.",
        )?,
        question(
            "q4",
            "info-hospital",
            "What does this blue sign with H indicate?",
            ["Hotel", "Highway", "Hospital", "Help center"],
            2,
            "The H symbol on a blue background indicates a hospital location.",
        )?,
        question(
            "q5",
            "construction-road-work",
            "What should you do when you see this orange sign?",
            [
                "Maintain speed",
                "Reduce speed and be alert",
                "Change lanes immediately",
                "Turn back",
            ],
            1,
            "Orange construction signs mean reduce speed and be alert for work zones.",
        )?,
    ])
}

pub(super) fn builtin_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(categories(), signs(), questions()?)
}
