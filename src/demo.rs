//! Fixed illustrative data served when no provider is configured or a provider call fails.

use crate::model::{Recipe, RecipeDetail, Video};
use rand::seq::SliceRandom;
use rand::Rng;

struct DemoRecipe {
    name: &'static str,
    ingredients: &'static [&'static str],
    instructions: &'static [&'static str],
    calories: u32,
}

struct DemoVideo {
    id: &'static str,
    title: &'static str,
    channel_title: &'static str,
    published_at: &'static str,
    view_count: &'static str,
    duration: &'static str,
}

const DEMO_INGREDIENTS: [[&str; 3]; 5] = [
    ["にんじん", "豚肉", "たまご"],
    ["トマト", "チーズ", "バジル"],
    ["鶏肉", "ブロッコリー", "にんにく"],
    ["サーモン", "レモン", "ディル"],
    ["豆腐", "しいたけ", "ねぎ"],
];

const DEMO_RECIPES: [DemoRecipe; 8] = [
    DemoRecipe {
        name: "豚肉と卵の甘辛炒め",
        ingredients: &[
            "豚肉 200g",
            "卵 2個",
            "にんじん 1本",
            "サラダ油 大さじ1",
            "醤油 大さじ2",
            "砂糖 小さじ1",
            "塩胡椒 少々",
        ],
        instructions: &[
            "豚肉を一口大に切り、塩胡椒で下味をつける",
            "にんじんを千切りにする",
            "フライパンに油を熱し、豚肉を炒める",
            "にんじんを加えて炒める",
            "醤油、砂糖で味付けする",
            "溶き卵を加えて炒り卵にする",
        ],
        calories: 480,
    },
    DemoRecipe {
        name: "トマトとチーズのカプレーゼ風サラダ",
        ingredients: &[
            "トマト 2個",
            "モッツァレラチーズ 100g",
            "バジル 適量",
            "オリーブオイル 大さじ2",
            "塩胡椒 少々",
            "レモン汁 小さじ1",
        ],
        instructions: &[
            "トマトを輪切りにする",
            "モッツァレラチーズを一口大に切る",
            "バジルを手でちぎる",
            "お皿にトマトとチーズを交互に並べる",
            "バジルを散らす",
            "オリーブオイル、レモン汁、塩胡椒で味付けする",
        ],
        calories: 320,
    },
    DemoRecipe {
        name: "鶏肉とブロッコリーの蒸し焼き",
        ingredients: &[
            "鶏胸肉 200g",
            "ブロッコリー 1/2株",
            "にんにく 2片",
            "オリーブオイル 大さじ1",
            "塩胡椒 少々",
            "レモン汁 小さじ1",
        ],
        instructions: &[
            "鶏肉に塩胡椒をまぶす",
            "ブロッコリーを小房に分ける",
            "にんにくをみじん切りにする",
            "フライパンに油を熱し、鶏肉を焼く",
            "ブロッコリーとにんにくを加えて蒸し焼きにする",
            "レモン汁をかけて仕上げる",
        ],
        calories: 380,
    },
    DemoRecipe {
        name: "サーモンのレモンバター焼き",
        ingredients: &[
            "サーモン 200g",
            "レモン 1/2個",
            "バター 20g",
            "ディル 適量",
            "塩胡椒 少々",
            "白ワイン 大さじ2",
        ],
        instructions: &[
            "サーモンに塩胡椒をまぶす",
            "レモンを薄切りにする",
            "フライパンにバターを溶かす",
            "サーモンを皮目を下にして焼く",
            "レモンとディルを加える",
            "白ワインを加えて蒸し焼きにする",
        ],
        calories: 420,
    },
    DemoRecipe {
        name: "豆腐としいたけの味噌汁",
        ingredients: &[
            "豆腐 1/2丁",
            "しいたけ 4個",
            "ねぎ 1本",
            "味噌 大さじ2",
            "だし汁 400ml",
            "塩 少々",
        ],
        instructions: &[
            "豆腐を一口大に切る",
            "しいたけを薄切りにする",
            "ねぎを小口切りにする",
            "だし汁を沸かす",
            "しいたけを加えて煮る",
            "豆腐と味噌を加えて溶かす",
            "ねぎを散らして完成",
        ],
        calories: 180,
    },
    DemoRecipe {
        name: "野菜たっぷりカレー",
        ingredients: &[
            "鶏肉 300g",
            "にんじん 2本",
            "じゃがいも 2個",
            "たまねぎ 1個",
            "カレールー 100g",
            "サラダ油 大さじ1",
            "水 600ml",
        ],
        instructions: &[
            "鶏肉を一口大に切る",
            "野菜を食べやすい大きさに切る",
            "フライパンに油を熱し、鶏肉を炒める",
            "野菜を加えて炒める",
            "水を加えて煮込む",
            "カレールーを溶かして完成",
        ],
        calories: 520,
    },
    DemoRecipe {
        name: "簡単パスタ",
        ingredients: &[
            "スパゲッティ 200g",
            "ベーコン 100g",
            "にんにく 2片",
            "オリーブオイル 大さじ2",
            "塩胡椒 少々",
            "パルメザンチーズ 適量",
        ],
        instructions: &[
            "パスタを茹でる",
            "ベーコンを細切りにする",
            "にんにくをみじん切りにする",
            "フライパンに油を熱し、ベーコンを炒める",
            "にんにくを加えて香りを出す",
            "茹でたパスタを加えて和える",
        ],
        calories: 650,
    },
    DemoRecipe {
        name: "和風サラダ",
        ingredients: &[
            "レタス 1/2個",
            "きゅうり 1本",
            "トマト 1個",
            "わかめ 適量",
            "醤油 大さじ1",
            "ごま油 小さじ1",
            "白ごま 適量",
        ],
        instructions: &[
            "レタスを手でちぎる",
            "きゅうりを薄切りにする",
            "トマトを一口大に切る",
            "わかめを水で戻す",
            "野菜を混ぜ合わせる",
            "醤油、ごま油で和える",
            "白ごまを散らす",
        ],
        calories: 120,
    },
];

const GENERIC_INSTRUCTIONS: [&str; 3] = [
    "1. 食材を丁寧に下ごしらえします。",
    "2. 各工程ごとに火加減やタイミングに注意して調理します。",
    "3. 盛り付けや仕上げも丁寧に行いましょう。",
];

const GENERIC_TIP: &str = "手順ごとに丁寧に進めると失敗しません。";

const DEMO_VIDEOS: [DemoVideo; 3] = [
    DemoVideo {
        id: "demo1",
        title: "豚肉と卵の甘辛炒めの作り方",
        channel_title: "料理チャンネル",
        published_at: "2024-01-01",
        view_count: "10万回",
        duration: "5:30",
    },
    DemoVideo {
        id: "demo2",
        title: "簡単！豚肉の甘辛炒めレシピ",
        channel_title: "簡単料理",
        published_at: "2024-01-15",
        view_count: "8万回",
        duration: "4:15",
    },
    DemoVideo {
        id: "demo3",
        title: "卵と豚肉の炒め物 - 家庭料理",
        channel_title: "家庭料理レシピ",
        published_at: "2024-02-01",
        view_count: "12万回",
        duration: "6:20",
    },
];

/// One of the demo ingredient triples, picked at random.
pub fn random_ingredients<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    let triple = &DEMO_INGREDIENTS[rng.gen_range(0..DEMO_INGREDIENTS.len())];
    triple.iter().map(|s| s.to_string()).collect()
}

/// Every demo recipe, in table order.
pub fn all_recipes() -> Vec<Recipe> {
    DEMO_RECIPES
        .iter()
        .map(|r| Recipe {
            name: r.name.to_string(),
            ingredients: r.ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: r.instructions.iter().map(|s| s.to_string()).collect(),
            calories: r.calories,
        })
        .collect()
}

/// `count` distinct demo recipes in uniformly shuffled order.
pub fn shuffled_recipes<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Recipe> {
    let mut recipes = all_recipes();
    recipes.shuffle(rng);
    recipes.truncate(count);
    recipes
}

/// The generic walkthrough, tagged with the requested recipe name.
pub fn generic_detail(recipe_name: &str) -> RecipeDetail {
    RecipeDetail {
        name: recipe_name.to_string(),
        detailed_instructions: GENERIC_INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
        tips: vec![GENERIC_TIP.to_string()],
    }
}

pub fn demo_videos() -> Vec<Video> {
    DEMO_VIDEOS
        .iter()
        .map(|v| Video {
            id: v.id.to_string(),
            title: v.title.to_string(),
            thumbnail: format!("https://img.youtube.com/vi/{}/mqdefault.jpg", v.id),
            channel_title: v.channel_title.to_string(),
            published_at: v.published_at.to_string(),
            view_count: Some(v.view_count.to_string()),
            duration: Some(v.duration.to_string()),
            description: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_demo_recipes_are_complete() {
        let recipes = all_recipes();
        assert_eq!(recipes.len(), 8);
        assert!(recipes.iter().all(|r| r.is_complete() && r.calories > 0));
    }

    #[test]
    fn test_shuffled_recipes_are_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let recipes = shuffled_recipes(&mut rng, 4);
        assert_eq!(recipes.len(), 4);
        let names: HashSet<_> = recipes.iter().map(|r| r.name.clone()).collect();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_shuffle_reaches_every_recipe() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            for recipe in shuffled_recipes(&mut rng, 4) {
                seen.insert(recipe.name);
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn test_random_ingredients_come_from_table() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let ingredients = random_ingredients(&mut rng);
            assert_eq!(ingredients.len(), 3);
            assert!(DEMO_INGREDIENTS
                .iter()
                .any(|triple| triple.iter().zip(&ingredients).all(|(a, b)| a == b)));
        }
    }

    #[test]
    fn test_generic_detail_keeps_name() {
        let detail = generic_detail("謎の料理");
        assert_eq!(detail.name, "謎の料理");
        assert_eq!(detail.detailed_instructions.len(), 3);
        assert_eq!(detail.tips.len(), 1);
    }

    #[test]
    fn test_demo_videos_have_thumbnails() {
        let videos = demo_videos();
        assert_eq!(videos.len(), 3);
        assert_eq!(
            videos[0].thumbnail,
            "https://img.youtube.com/vi/demo1/mqdefault.jpg"
        );
    }
}
