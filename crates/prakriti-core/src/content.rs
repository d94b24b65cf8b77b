//! Per-dosha derived content: diet charts, daily routines, and result
//! recommendations. Pure static data keyed by [`Dosha`]; the presentation
//! layer renders it verbatim.

use crate::models::Dosha;

/// A diet chart for one dosha.
#[derive(Debug, Clone, Copy)]
pub struct DietChart {
    pub title: &'static str,
    pub breakfast: &'static [&'static str],
    pub lunch: &'static [&'static str],
    pub dinner: &'static [&'static str],
    pub snacks: &'static [&'static str],
    pub beverages: &'static [&'static str],
    pub avoid: &'static [&'static str],
    pub tips: &'static [&'static str],
}

/// One timed entry in a daily routine.
#[derive(Debug, Clone, Copy)]
pub struct RoutineEntry {
    pub time: &'static str,
    pub activity: &'static str,
}

/// A full-day routine for one dosha.
#[derive(Debug, Clone, Copy)]
pub struct DailyRoutine {
    pub title: &'static str,
    pub schedule: &'static [RoutineEntry],
    pub tips: &'static [&'static str],
}

/// Result-screen recommendations for one dosha.
#[derive(Debug, Clone, Copy)]
pub struct Recommendation {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
}

/// Diet chart for the given dosha.
pub fn diet_chart(dosha: Dosha) -> &'static DietChart {
    match dosha {
        Dosha::Vata => &VATA_DIET,
        Dosha::Pitta => &PITTA_DIET,
        Dosha::Kapha => &KAPHA_DIET,
    }
}

/// Daily routine for the given dosha.
pub fn daily_routine(dosha: Dosha) -> &'static DailyRoutine {
    match dosha {
        Dosha::Vata => &VATA_ROUTINE,
        Dosha::Pitta => &PITTA_ROUTINE,
        Dosha::Kapha => &KAPHA_ROUTINE,
    }
}

/// Result recommendations for the given dosha.
pub fn recommendation(dosha: Dosha) -> &'static Recommendation {
    match dosha {
        Dosha::Vata => &VATA_RECOMMENDATION,
        Dosha::Pitta => &PITTA_RECOMMENDATION,
        Dosha::Kapha => &KAPHA_RECOMMENDATION,
    }
}

static VATA_DIET: DietChart = DietChart {
    title: "Vata — warm, grounding, and nourishing",
    breakfast: &["Warm porridge with milk or ghee", "Stewed fruits with cinnamon"],
    lunch: &["Rice/quinoa with cooked vegetables", "Moong dal soup"],
    dinner: &["Light khichdi or stew", "Warm milk with cardamom"],
    snacks: &["Soaked almonds, baked apple"],
    beverages: &["Warm water, ginger tea"],
    avoid: &["Raw salads in excess, cold dry foods", "Skipping meals"],
    tips: &[
        "Eat regularly, prefer warm cooked meals",
        "Use sesame oil for cooking/massage",
    ],
};

static PITTA_DIET: DietChart = DietChart {
    title: "Pitta — cooling, calming, and less spicy",
    breakfast: &["Cooling smoothie with cucumber & mint", "Oat porridge with pear"],
    lunch: &["Rice/barley with greens", "Lentils with cilantro"],
    dinner: &["Light khichdi, steamed veggies", "Avoid heavy late meals"],
    snacks: &["Fresh fruit, coconut"],
    beverages: &["Coconut water, mint tea"],
    avoid: &["Hot/spicy foods, fried items", "Excess alcohol/caffeine"],
    tips: &["Stay cool midday", "Prefer sweet/bitter tastes"],
};

static KAPHA_DIET: DietChart = DietChart {
    title: "Kapha — light, warm, and stimulating",
    breakfast: &["Barley porridge with ginger", "Light vegetable stir-fry"],
    lunch: &["Cooked grains + steamed vegetables", "Warming spices"],
    dinner: &["Lentil soup, kitchari", "Avoid heavy meals at night"],
    snacks: &["Dry roasted nuts, apple"],
    beverages: &["Warm lemon water, ginger tea"],
    avoid: &["Cold dairy, heavy sweets, fried foods", "Overeating"],
    tips: &[
        "Stay active, prefer light & warm foods",
        "Avoid late-night heavy meals",
    ],
};

static VATA_ROUTINE: DailyRoutine = DailyRoutine {
    title: "Vata Daily Routine — grounding & stabilizing",
    schedule: &[
        RoutineEntry { time: "6:00 AM", activity: "Wake up early, drink a cup of warm water" },
        RoutineEntry { time: "6:15 AM", activity: "Gentle oil massage (warm sesame oil) + warm shower" },
        RoutineEntry { time: "7:00 AM", activity: "Light yoga or stretching (slow, calming)" },
        RoutineEntry { time: "8:00 AM", activity: "Warm cooked breakfast (porridge or khichdi)" },
        RoutineEntry { time: "10:30 AM", activity: "Short walk, avoid overstimulation" },
        RoutineEntry { time: "1:00 PM", activity: "Warm, cooked lunch (main meal)" },
        RoutineEntry { time: "3:30 PM", activity: "Light warm snack (soaked nuts or baked fruit)" },
        RoutineEntry { time: "6:00 PM", activity: "Gentle exercise or calming walk" },
        RoutineEntry { time: "7:30 PM", activity: "Warm light dinner (soup or khichdi)" },
        RoutineEntry { time: "9:00 PM", activity: "Wind down, warm herbal tea (cinnamon/ginger)" },
        RoutineEntry { time: "10:00 PM", activity: "Sleep (regular bedtime helps balance vata)" },
    ],
    tips: &[
        "Keep regular meal and sleep times.",
        "Favor warmth, grounding routines and gentle touch.",
        "Avoid excessive stimulation and cold/raw foods.",
    ],
};

static PITTA_ROUTINE: DailyRoutine = DailyRoutine {
    title: "Pitta Daily Routine — cooling & calming",
    schedule: &[
        RoutineEntry { time: "6:00 AM", activity: "Wake up before sunrise, sip room-temp water" },
        RoutineEntry { time: "6:30 AM", activity: "Cooling breathing exercises / moderate yoga" },
        RoutineEntry { time: "7:30 AM", activity: "Cooling breakfast (oat porridge, fruits)" },
        RoutineEntry { time: "10:30 AM", activity: "Short break; avoid midday heat" },
        RoutineEntry { time: "1:00 PM", activity: "Main meal (largest meal), include cooling veggies" },
        RoutineEntry { time: "3:30 PM", activity: "Fresh fruit or coconut water" },
        RoutineEntry { time: "6:00 PM", activity: "Light activity/relaxing walk (avoid aggressive workouts at peak heat)" },
        RoutineEntry { time: "7:30 PM", activity: "Light dinner (steamed veg or khichdi)" },
        RoutineEntry { time: "9:00 PM", activity: "Soothing routine — cooling tea (mint/coriander)" },
        RoutineEntry { time: "10:00 PM", activity: "Bedtime (avoid late night work or heated arguments)" },
    ],
    tips: &[
        "Avoid heavy spices and midday overheating.",
        "Include cooling foods and calm the mind with breathing.",
        "Keep a consistent sleep schedule and avoid stimulants.",
    ],
};

static KAPHA_ROUTINE: DailyRoutine = DailyRoutine {
    title: "Kapha Daily Routine — energizing & stimulating",
    schedule: &[
        RoutineEntry { time: "5:30 AM", activity: "Wake up early; splash warm water on face" },
        RoutineEntry { time: "6:00 AM", activity: "Energizing exercise (brisk walk, jogging, cardio)" },
        RoutineEntry { time: "7:00 AM", activity: "Warm, light breakfast (barley or millet porridge with spices)" },
        RoutineEntry { time: "10:30 AM", activity: "Activity break — avoid long sedentary stretches" },
        RoutineEntry { time: "1:00 PM", activity: "Main meal (lighter than vata/pitta, favor warming spices)" },
        RoutineEntry { time: "3:30 PM", activity: "Light snack if hungry (roasted nuts, ginger tea)" },
        RoutineEntry { time: "6:00 PM", activity: "Active evening — yoga, brisk walk or light sport" },
        RoutineEntry { time: "7:30 PM", activity: "Light, early dinner (soups, steamed veg)" },
        RoutineEntry { time: "9:00 PM", activity: "Wind down; calming activities but avoid heavy sedatives" },
        RoutineEntry { time: "10:00 PM", activity: "Sleep — earlier bedtime to avoid kapha stagnation" },
    ],
    tips: &[
        "Stay active during the day; avoid long naps and heavy dinners.",
        "Prefer warm, dry, and light foods; use stimulating spices.",
        "Build routines that boost energy and circulation.",
    ],
};

static VATA_RECOMMENDATION: Recommendation = Recommendation {
    title: "Vata — calming & grounding",
    bullets: &[
        "Favor warm, cooked foods (soups, stews).",
        "Regular meal times; avoid long fasting.",
        "Gentle oil massage (abhyanga) with warm sesame oil.",
        "Prefer warm, moist climates and layers of clothing.",
    ],
};

static PITTA_RECOMMENDATION: Recommendation = Recommendation {
    title: "Pitta — cooling & soothing",
    bullets: &[
        "Favor cooling foods (cucumbers, melons, milk).",
        "Avoid spicy, fried, and sour foods.",
        "Practice calming breathing & avoid midday heat.",
        "Use cooling oils like coconut for massage.",
    ],
};

static KAPHA_RECOMMENDATION: Recommendation = Recommendation {
    title: "Kapha — light & stimulating",
    bullets: &[
        "Favor lighter, drier foods and warming spices.",
        "Stay active: brisk walks and regular exercise.",
        "Avoid heavy, oily, and cold foods.",
        "Stimulate digestion with ginger, black pepper.",
    ],
};
