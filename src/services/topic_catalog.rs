//! 科目目录 - 业务能力层
//!
//! 静态的科目 → 子主题映射，启动后只读，用于让生成的题目更多样化。

use phf::phf_map;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// 科目 → 子主题静态目录
static TOPIC_CATALOG: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "Mathematics" => &[
        "Basic Arithmetic",
        "Fractions",
        "Percentages",
        "Algebra",
        "Geometry",
    ],
    "Science" => &[
        "The Solar System",
        "States of Matter",
        "Electricity",
        "Weather and Seasons",
        "Simple Machines",
    ],
    "Physics" => &[
        "Motion and Force",
        "Energy",
        "Light",
        "Sound",
        "Gravity",
    ],
    "Biology" => &[
        "Cells",
        "The Food Chain",
        "Photosynthesis",
        "Human Organs",
        "Animal Habitats",
    ],
    "History" => &[
        "Ancient Civilizations",
        "The Liberation War",
        "World Explorers",
        "Famous Inventions",
        "Old Trade Routes",
    ],
    "General Knowledge" => &[
        "World Capitals",
        "Famous Landmarks",
        "Sports",
        "Currencies",
        "National Symbols",
    ],
};

/// 从科目中均匀随机抽取一个子主题
///
/// 未知科目不报错，原样返回（退化为"自己就是主题"）。
pub fn pick_subtopic(subject: &str) -> String {
    match TOPIC_CATALOG.get(subject) {
        Some(subtopics) => {
            let mut rng = StdRng::from_entropy();
            subtopics
                .choose(&mut rng)
                .map(|s| s.to_string())
                .unwrap_or_else(|| subject.to_string())
        }
        None => subject.to_string(),
    }
}
