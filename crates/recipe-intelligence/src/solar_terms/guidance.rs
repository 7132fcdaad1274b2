// ABOUTME: Fixed bilingual seasonal guidance for each solar term
// ABOUTME: Missing entries fall back to generic seasonal advice in the requested language
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::classifier::SolarTerm;
use recipe_core::models::Language;
use serde::Serialize;

/// Seasonal food and wellness guidance for one term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TermGuidance {
    /// Short heading
    pub title: &'static str,
    /// One-line summary of the season's focus
    pub description: &'static str,
    /// Suggested dishes with their purpose
    pub recipes: [&'static str; 3],
    /// Lifestyle tips
    pub tips: [&'static str; 3],
}

/// Guidance for a term in the requested language
///
/// Terms without an entry (the Chinese table has none for 惊蛰) get the
/// generic guidance.
#[must_use]
pub fn guidance_for(term: SolarTerm, language: Language) -> &'static TermGuidance {
    let (table, fallback) = match language {
        Language::English => (ENGLISH_GUIDANCE, &ENGLISH_FALLBACK),
        Language::Chinese => (CHINESE_GUIDANCE, &CHINESE_FALLBACK),
    };
    table
        .iter()
        .find(|(entry, _)| *entry == term)
        .map_or(fallback, |(_, guidance)| guidance)
}

static ENGLISH_FALLBACK: TermGuidance = TermGuidance {
    title: "Seasonal Wellness",
    description: "Adjust diet according to the season",
    recipes: [
        "Eat more seasonal vegetables and fruits",
        "Maintain a balanced diet",
        "Exercise appropriately and ensure adequate sleep",
    ],
    tips: [
        "Pay attention to food hygiene",
        "Maintain a pleasant mood",
        "Keep a regular routine",
    ],
};

static CHINESE_FALLBACK: TermGuidance = TermGuidance {
    title: "养生建议",
    description: "根据季节调整饮食",
    recipes: ["多吃时令蔬菜水果", "保持饮食均衡", "适量运动，保证睡眠"],
    tips: ["注意饮食卫生", "保持心情愉快", "规律作息"],
};

static ENGLISH_GUIDANCE: &[(SolarTerm, TermGuidance)] = &[
    (
        SolarTerm::BeginningOfSpring,
        TermGuidance {
            title: "Beginning of Spring Wellness",
            description: "Spring begins with rising yang energy, focus on ascending nourishment",
            recipes: [
                "Stir-fried Chives with Eggs - Boosts yang energy",
                "Bamboo Shoot Chicken Soup - Replenishes vitality",
                "Goji Berry Congee - Nourishes liver and eyes",
            ],
            tips: [
                "Eat more pungent and sweet dispersing foods",
                "Reduce sour foods",
                "Keep warm, guard against late spring cold",
            ],
        },
    ),
    (
        SolarTerm::RainWater,
        TermGuidance {
            title: "Rain Water Wellness",
            description: "Rain Water season, humidity increases",
            recipes: [
                "Yam and Job's Tears Congee - Strengthens spleen, removes dampness",
                "Crucian Carp Soup - Reduces water retention",
                "Red Date Lotus Seed Soup - Calms heart and mind",
            ],
            tips: [
                "Guard against moisture and humidity",
                "Eat more spleen-strengthening foods",
                "Exercise appropriately to dispel dampness",
            ],
        },
    ),
    (
        SolarTerm::AwakeningOfInsects,
        TermGuidance {
            title: "Awakening of Insects Wellness",
            description: "Spring thunder awakens insects, nourish liver and yang",
            recipes: [
                "Pear Water - Moistens lungs, stops cough",
                "Shepherd's Purse Tofu Soup - Clears heat, nourishes liver",
                "Chive Shrimp - Boosts yang energy",
            ],
            tips: [
                "Eat light foods",
                "Early to bed and rise for liver health",
                "Guard against spring drowsiness",
            ],
        },
    ),
    (
        SolarTerm::SpringEquinox,
        TermGuidance {
            title: "Spring Equinox Wellness",
            description: "Balance of yin and yang, focus on harmony",
            recipes: [
                "Spring Vegetables with Pork - Balances yin and yang",
                "Toon Tofu Salad - Clears heat, strengthens stomach",
                "Shepherd's Purse Dumplings - Calms liver and stomach",
            ],
            tips: [
                "Diet should balance cold and hot",
                "Maintain emotional stability",
                "Moderate outdoor exercise",
            ],
        },
    ),
    (
        SolarTerm::PureBrightness,
        TermGuidance {
            title: "Pure Brightness Wellness",
            description: "Pure Brightness season, focus on liver nourishment",
            recipes: [
                "Mugwort Rice Balls - Dispels dampness and cold",
                "Spinach Pork Liver Soup - Nourishes blood and liver",
                "Chrysanthemum Goji Tea - Clears liver, brightens eyes",
            ],
            tips: [
                "Maintain a cheerful mood",
                "Eat more green vegetables",
                "Early to bed and rise for liver health",
            ],
        },
    ),
    (
        SolarTerm::GrainRain,
        TermGuidance {
            title: "Grain Rain Wellness",
            description: "Rain nourishes grains, strengthen spleen, remove dampness",
            recipes: [
                "Corn Silk Tea - Diuretic, removes dampness",
                "Poria Congee - Strengthens spleen, calms spirit",
                "Celery Lily Stir-fry - Clears heat, calms liver",
            ],
            tips: [
                "Guard against dampness invasion",
                "Eat dampness-removing foods appropriately",
                "Avoid sitting on damp ground",
            ],
        },
    ),
    (
        SolarTerm::BeginningOfSummer,
        TermGuidance {
            title: "Beginning of Summer Wellness",
            description: "Summer begins, focus on heart nourishment",
            recipes: [
                "Lotus Leaf Congee - Clears heat, relieves summer heat",
                "Bitter Melon Salad - Clears heart fire",
                "Mung Bean Soup - Clears heat, detoxifies",
            ],
            tips: [
                "Maintain a happy mood",
                "Rest appropriately at noon",
                "Eat more red foods for heart health",
            ],
        },
    ),
    (
        SolarTerm::GrainBuds,
        TermGuidance {
            title: "Grain Buds Wellness",
            description: "Grain Buds season, clear heat and dampness",
            recipes: [
                "Winter Melon Soup - Reduces water retention",
                "Cucumber Jellyfish Salad - Clears heat, relieves summer heat",
                "Job's Tears Red Bean Congee - Strengthens spleen, removes dampness",
            ],
            tips: [
                "Guard against heat",
                "Avoid excessive cold foods",
                "Keep skin clean",
            ],
        },
    ),
    (
        SolarTerm::GrainInEar,
        TermGuidance {
            title: "Grain in Ear Wellness",
            description: "Plum rain season, guard against dampness and heat",
            recipes: [
                "Sour Plum Drink - Generates fluids, quenches thirst",
                "Ginger Tea - Dispels cold and dampness",
                "Perilla Fried River Snails - Releases exterior cold",
            ],
            tips: [
                "Guard against mold and humidity",
                "Diet should be light",
                "Nap appropriately to nourish heart",
            ],
        },
    ),
    (
        SolarTerm::SummerSolstice,
        TermGuidance {
            title: "Summer Solstice Wellness",
            description: "Peak yang energy, focus on yin nourishment",
            recipes: [
                "Cold Noodles - Clears heat, stimulates appetite",
                "Tomato Egg Soup - Generates fluids, quenches thirst",
                "Watermelon Rind Stir-fry - Clears heat, diuretic",
            ],
            tips: [
                "Guard against heat",
                "Nap appropriately",
                "Drink plenty of water",
            ],
        },
    ),
    (
        SolarTerm::MinorHeat,
        TermGuidance {
            title: "Minor Heat Wellness",
            description: "Minor Heat is hot, guard against heat",
            recipes: [
                "Lotus Seed Soup - Clears heart, calms spirit",
                "Loofah Soup - Clears heat, cools blood",
                "Mint Tea - Cool and refreshing",
            ],
            tips: [
                "Avoid intense sun exposure",
                "Diet should be light",
                "Maintain adequate sleep",
            ],
        },
    ),
    (
        SolarTerm::MajorHeat,
        TermGuidance {
            title: "Major Heat Wellness",
            description: "Hottest time of year, focus on clearing heat",
            recipes: [
                "Winter Melon Old Duck Soup - Clears heat, nourishes",
                "Mung Bean Lily Congee - Clears heat, calms spirit",
                "Cucumber Salad - Clears heat, quenches thirst",
            ],
            tips: [
                "Guard against heat stroke",
                "Drink warm water",
                "Avoid excessive sweating",
            ],
        },
    ),
    (
        SolarTerm::BeginningOfAutumn,
        TermGuidance {
            title: "Beginning of Autumn Wellness",
            description: "Autumn begins, nourish yin and moisten dryness",
            recipes: [
                "Tremella Lotus Seed Soup - Nourishes yin, moistens lungs",
                "Pear Syrup - Moistens lungs, stops cough",
                "Sesame Paste - Nourishes yin, moistens dryness",
            ],
            tips: [
                "Reduce spicy foods",
                "Eat more yin-nourishing foods",
                "Early to bed and rise",
            ],
        },
    ),
    (
        SolarTerm::EndOfHeat,
        TermGuidance {
            title: "End of Heat Wellness",
            description: "Heat dissipates, moisten dryness, nourish lungs",
            recipes: [
                "Lily Congee - Moistens lungs, stops cough",
                "Rock Sugar Pear Stew - Clears heat, moistens dryness",
                "Honey Water - Moistens intestines, promotes bowel movement",
            ],
            tips: [
                "Stay hydrated",
                "Avoid autumn dryness",
                "Exercise appropriately",
            ],
        },
    ),
    (
        SolarTerm::WhiteDew,
        TermGuidance {
            title: "White Dew Wellness",
            description: "Weather cools, guard against autumn dryness",
            recipes: [
                "Yam Pork Rib Soup - Strengthens spleen, moistens lungs",
                "Osmanthus Glutinous Rice Lotus Root - Strengthens spleen, stimulates appetite",
                "Almond Tea - Moistens lungs, stops cough",
            ],
            tips: [
                "Add clothing in morning and evening",
                "Eat more dryness-moistening foods",
                "Prevent colds",
            ],
        },
    ),
    (
        SolarTerm::AutumnEquinox,
        TermGuidance {
            title: "Autumn Equinox Wellness",
            description: "Balance of yin and yang, focus on moistening dryness",
            recipes: [
                "Autumn Pear Paste - Moistens lungs, stops cough",
                "Walnut Congee - Nourishes kidneys, moistens intestines",
                "Pomegranate Juice - Generates fluids, quenches thirst",
            ],
            tips: [
                "Maintain emotional stability",
                "Diet should be moistening",
                "Allow appropriate autumn chill",
            ],
        },
    ),
    (
        SolarTerm::ColdDew,
        TermGuidance {
            title: "Cold Dew Wellness",
            description: "Cold Dew turns cold, guard against cold and dryness",
            recipes: [
                "Chestnut Stewed Chicken - Nourishes kidneys, strengthens spleen",
                "Red Date Longan Tea - Nourishes blood, beautifies skin",
                "Peanut Pig's Feet Soup - Nourishes yin, moistens dryness",
            ],
            tips: [
                "Keep warm",
                "Eat more warming foods",
                "Prevent respiratory diseases",
            ],
        },
    ),
    (
        SolarTerm::FrostsDescent,
        TermGuidance {
            title: "Frost's Descent Wellness",
            description: "Frost's Descent season, keep warm",
            recipes: [
                "Mutton Soup - Warms and dispels cold",
                "Ginger Duck - Warms center, dispels cold",
                "Goji Beef Stew - Nourishes kidneys, boosts yang",
            ],
            tips: [
                "Guard against cold",
                "Eat more warming foods",
                "Supplement appropriately",
            ],
        },
    ),
    (
        SolarTerm::BeginningOfWinter,
        TermGuidance {
            title: "Beginning of Winter Wellness",
            description: "Winter begins, nourish kidneys and store essence",
            recipes: [
                "Angelica Ginger Mutton Soup - Warms and nourishes qi and blood",
                "Black Sesame Paste - Nourishes kidneys, darkens hair",
                "Walnut Pig Kidney Stew - Nourishes kidneys, strengthens waist",
            ],
            tips: [
                "Early to bed, late to rise",
                "Keep warm",
                "Supplement appropriately",
            ],
        },
    ),
    (
        SolarTerm::MinorSnow,
        TermGuidance {
            title: "Minor Snow Wellness",
            description: "Minor Snow season, warming supplements appropriate",
            recipes: [
                "Red Date Goji Tea - Nourishes qi and blood",
                "Longan Glutinous Rice Congee - Warms stomach, nourishes heart",
                "Stewed Beef Brisket - Warms and strengthens body",
            ],
            tips: [
                "Guard against cold and frost",
                "Maintain a happy mood",
                "Exercise moderately",
            ],
        },
    ),
    (
        SolarTerm::MajorSnow,
        TermGuidance {
            title: "Major Snow Wellness",
            description: "Major Snow freezes rivers, focus on warming supplements",
            recipes: [
                "Ginseng Chicken Soup - Greatly supplements primordial qi",
                "Ejiao Cake - Nourishes blood, beautifies skin",
                "Deer Antler Stew - Nourishes kidneys, boosts yang",
            ],
            tips: [
                "Keep head warm",
                "Eat more warming foods",
                "Avoid overexertion",
            ],
        },
    ),
    (
        SolarTerm::WinterSolstice,
        TermGuidance {
            title: "Winter Solstice Wellness",
            description: "Winter Solstice yang rises, nourish yin and assist yang",
            recipes: [
                "Dumplings - Symbolizes reunion",
                "Tangyuan - Symbolizes completeness",
                "Eight Treasure Rice - Nourishing and healthful",
            ],
            tips: [
                "Consolidate foundation and cultivate vitality",
                "Supplement appropriately",
                "Keep indoor warm",
            ],
        },
    ),
    (
        SolarTerm::MinorCold,
        TermGuidance {
            title: "Minor Cold Wellness",
            description: "Minor Cold is extremely cold, warm and guard against cold",
            recipes: [
                "Laba Congee - Warms and nourishes spleen and stomach",
                "Braised Pork - Replenishes energy",
                "Ginger Brown Sugar Tea - Dispels cold, warms body",
            ],
            tips: [
                "Guard against cold",
                "Eat more high-calorie foods",
                "Exercise moderately",
            ],
        },
    ),
    (
        SolarTerm::MajorCold,
        TermGuidance {
            title: "Major Cold Wellness",
            description: "Coldest time of year, nourish kidneys and guard against cold",
            recipes: [
                "Hot Pot - Dispels cold, warms and supplements",
                "Medicinal Stew - Nourishes and strengthens body",
                "Brown Sugar Ginger Tea - Warms body, dispels cold",
            ],
            tips: [
                "Keep warm",
                "Supplement appropriately",
                "Prevent colds",
            ],
        },
    ),
];

static CHINESE_GUIDANCE: &[(SolarTerm, TermGuidance)] = &[
    (
        SolarTerm::BeginningOfSpring,
        TermGuidance {
            title: "立春养生",
            description: "立春阳气初生，宜升补",
            recipes: [
                "韭菜炒鸡蛋 - 助阳气生发",
                "春笋炖鸡汤 - 补充元气",
                "枸杞粥 - 养肝明目",
            ],
            tips: [
                "多吃辛甘发散食物",
                "少食酸味食物",
                "注意保暖，防倒春寒",
            ],
        },
    ),
    (
        SolarTerm::RainWater,
        TermGuidance {
            title: "雨水养生",
            description: "雨水时节，湿气渐重",
            recipes: [
                "山药薏米粥 - 健脾祛湿",
                "鲫鱼汤 - 利水消肿",
                "红枣莲子羹 - 养心安神",
            ],
            tips: [
                "注意防湿防潮",
                "多吃健脾利湿食物",
                "适当运动排湿",
            ],
        },
    ),
    (
        SolarTerm::SpringEquinox,
        TermGuidance {
            title: "春分养生",
            description: "阴阳平衡，注重调和",
            recipes: [
                "春菜炒肉片 - 平衡阴阳",
                "香椿拌豆腐 - 清热健胃",
                "荠菜饺子 - 平肝和胃",
            ],
            tips: [
                "饮食宜寒热均衡",
                "保持情绪稳定",
                "适量户外运动",
            ],
        },
    ),
    (
        SolarTerm::PureBrightness,
        TermGuidance {
            title: "清明养生",
            description: "清明时节，注重养肝",
            recipes: [
                "艾草青团 - 祛湿散寒",
                "菠菜猪肝汤 - 补血养肝",
                "菊花枸杞茶 - 清肝明目",
            ],
            tips: [
                "保持心情舒畅",
                "多吃绿色蔬菜",
                "早睡早起养肝",
            ],
        },
    ),
    (
        SolarTerm::GrainRain,
        TermGuidance {
            title: "谷雨养生",
            description: "雨生百谷，健脾祛湿",
            recipes: [
                "玉米须茶 - 利尿祛湿",
                "茯苓粥 - 健脾安神",
                "芹菜炒百合 - 清热平肝",
            ],
            tips: [
                "防湿邪入侵",
                "适当食用祛湿食物",
                "避免久坐湿地",
            ],
        },
    ),
    (
        SolarTerm::BeginningOfSummer,
        TermGuidance {
            title: "立夏养生",
            description: "夏季开始，养心为主",
            recipes: [
                "荷叶粥 - 清热解暑",
                "凉拌苦瓜 - 清心火",
                "绿豆汤 - 清热解毒",
            ],
            tips: [
                "保持心情愉快",
                "午间适当休息",
                "多吃红色食物养心",
            ],
        },
    ),
    (
        SolarTerm::GrainBuds,
        TermGuidance {
            title: "小满养生",
            description: "小满时节，清热利湿",
            recipes: [
                "冬瓜汤 - 利水消肿",
                "黄瓜拌海蜇 - 清热解暑",
                "薏米红豆粥 - 健脾祛湿",
            ],
            tips: [
                "注意防暑降温",
                "避免过食生冷",
                "保持皮肤清洁",
            ],
        },
    ),
    (
        SolarTerm::GrainInEar,
        TermGuidance {
            title: "芒种养生",
            description: "梅雨时节，防湿防暑",
            recipes: [
                "酸梅汤 - 生津止渴",
                "姜茶 - 驱寒祛湿",
                "紫苏炒田螺 - 解表散寒",
            ],
            tips: [
                "注意防霉防潮",
                "饮食宜清淡",
                "适当午睡养心",
            ],
        },
    ),
    (
        SolarTerm::SummerSolstice,
        TermGuidance {
            title: "夏至养生",
            description: "阳气最盛，注意养阴",
            recipes: [
                "凉面 - 清热开胃",
                "番茄鸡蛋汤 - 生津止渴",
                "西瓜皮炒肉 - 清热利尿",
            ],
            tips: [
                "注意防暑降温",
                "适当午休",
                "多补充水分",
            ],
        },
    ),
    (
        SolarTerm::MinorHeat,
        TermGuidance {
            title: "小暑养生",
            description: "小暑炎热，注意防暑",
            recipes: [
                "莲子汤 - 清心安神",
                "丝瓜汤 - 清热凉血",
                "薄荷茶 - 清凉解暑",
            ],
            tips: [
                "避免烈日暴晒",
                "饮食宜清淡",
                "保持充足睡眠",
            ],
        },
    ),
    (
        SolarTerm::MajorHeat,
        TermGuidance {
            title: "大暑养生",
            description: "一年最热，重在清热",
            recipes: [
                "冬瓜老鸭汤 - 清热滋补",
                "绿豆百合粥 - 清热安神",
                "凉拌黄瓜 - 清热解渴",
            ],
            tips: [
                "防中暑",
                "多喝温水",
                "避免过度出汗",
            ],
        },
    ),
    (
        SolarTerm::BeginningOfAutumn,
        TermGuidance {
            title: "立秋养生",
            description: "秋季开始，滋阴润燥",
            recipes: [
                "银耳莲子羹 - 滋阴润肺",
                "梨子糖水 - 润肺止咳",
                "芝麻糊 - 滋阴润燥",
            ],
            tips: [
                "少吃辛辣",
                "多吃滋阴食物",
                "早睡早起",
            ],
        },
    ),
    (
        SolarTerm::EndOfHeat,
        TermGuidance {
            title: "处暑养生",
            description: "暑气渐消，润燥养肺",
            recipes: [
                "百合粥 - 润肺止咳",
                "冰糖炖雪梨 - 清热润燥",
                "蜂蜜水 - 润肠通便",
            ],
            tips: [
                "注意补水",
                "避免秋燥",
                "适当运动",
            ],
        },
    ),
    (
        SolarTerm::WhiteDew,
        TermGuidance {
            title: "白露养生",
            description: "天气转凉，防秋燥",
            recipes: [
                "山药排骨汤 - 健脾润肺",
                "桂花糯米藕 - 健脾开胃",
                "杏仁茶 - 润肺止咳",
            ],
            tips: [
                "早晚添衣",
                "多吃润燥食物",
                "预防感冒",
            ],
        },
    ),
    (
        SolarTerm::AutumnEquinox,
        TermGuidance {
            title: "秋分养生",
            description: "阴阳平衡，润燥为主",
            recipes: [
                "秋梨膏 - 润肺止咳",
                "核桃粥 - 补肾润肠",
                "石榴汁 - 生津止渴",
            ],
            tips: [
                "保持情绪稳定",
                "饮食宜滋润",
                "适当秋冻",
            ],
        },
    ),
    (
        SolarTerm::ColdDew,
        TermGuidance {
            title: "寒露养生",
            description: "寒露渐冷，防寒润燥",
            recipes: [
                "栗子炖鸡 - 补肾健脾",
                "红枣桂圆茶 - 补血养颜",
                "花生猪脚汤 - 滋阴润燥",
            ],
            tips: [
                "注意保暖",
                "多吃温补食物",
                "预防呼吸道疾病",
            ],
        },
    ),
    (
        SolarTerm::FrostsDescent,
        TermGuidance {
            title: "霜降养生",
            description: "霜降时节，注意保暖",
            recipes: [
                "羊肉汤 - 温补驱寒",
                "姜母鸭 - 温中散寒",
                "枸杞炖牛肉 - 补肾壮阳",
            ],
            tips: [
                "防寒保暖",
                "多吃温性食物",
                "适当进补",
            ],
        },
    ),
    (
        SolarTerm::BeginningOfWinter,
        TermGuidance {
            title: "立冬养生",
            description: "冬季开始，补肾藏精",
            recipes: [
                "当归生姜羊肉汤 - 温补气血",
                "黑芝麻糊 - 补肾乌发",
                "核桃炖猪腰 - 补肾强腰",
            ],
            tips: [
                "早睡晚起",
                "注意保暖",
                "适当进补",
            ],
        },
    ),
    (
        SolarTerm::MinorSnow,
        TermGuidance {
            title: "小雪养生",
            description: "小雪时节，温补为宜",
            recipes: [
                "红枣枸杞茶 - 补气养血",
                "桂圆糯米粥 - 暖胃补心",
                "炖牛腩 - 温补强身",
            ],
            tips: [
                "防寒防冻",
                "保持心情愉快",
                "适度运动",
            ],
        },
    ),
    (
        SolarTerm::MajorSnow,
        TermGuidance {
            title: "大雪养生",
            description: "大雪封河，重在温补",
            recipes: [
                "人参鸡汤 - 大补元气",
                "阿胶糕 - 补血养颜",
                "鹿茸炖汤 - 补肾壮阳",
            ],
            tips: [
                "注意头部保暖",
                "多吃温补食物",
                "避免过度劳累",
            ],
        },
    ),
    (
        SolarTerm::WinterSolstice,
        TermGuidance {
            title: "冬至养生",
            description: "冬至阳生，滋阴助阳",
            recipes: [
                "饺子 - 寓意团圆",
                "汤圆 - 象征圆满",
                "八宝饭 - 滋补养生",
            ],
            tips: [
                "固本培元",
                "适当进补",
                "保持室内温暖",
            ],
        },
    ),
    (
        SolarTerm::MinorCold,
        TermGuidance {
            title: "小寒养生",
            description: "小寒冷极，温补御寒",
            recipes: [
                "腊八粥 - 温补脾胃",
                "红烧肉 - 补充能量",
                "姜糖水 - 驱寒暖身",
            ],
            tips: [
                "注意防寒",
                "多吃高热量食物",
                "适度运动",
            ],
        },
    ),
    (
        SolarTerm::MajorCold,
        TermGuidance {
            title: "大寒养生",
            description: "一年最冷，补肾防寒",
            recipes: [
                "火锅 - 驱寒温补",
                "药膳炖汤 - 滋补强身",
                "红糖姜茶 - 暖身驱寒",
            ],
            tips: [
                "注意保暖",
                "适当进补",
                "预防感冒",
            ],
        },
    ),
];
