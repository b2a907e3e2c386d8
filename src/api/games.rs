//! 确定性小游戏接口
//!
//! 算术集市、抛体板球、网格寻路。全部是纯计算，不经过生成服务。

use axum::Json;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const MARKET_ITEMS: &[&str] = &["Potatoes", "Onions", "Rice", "Lentils", "Tomatoes"];

/// 网格地图：0 空地，1 障碍，3 终点
const GRID: [[u8; 3]; 3] = [[0, 0, 0], [1, 1, 0], [0, 0, 3]];

#[derive(Debug, Serialize)]
pub struct MathProblem {
    item: String,
    price_per_kg: u32,
    quantity: u32,
    correct_answer: u32,
}

/// `GET /api/math/problem` - 随机集市算术题
pub async fn math_problem() -> Json<MathProblem> {
    let mut rng = StdRng::from_entropy();
    Json(random_problem(&mut rng))
}

fn random_problem(rng: &mut impl Rng) -> MathProblem {
    let price_per_kg = rng.gen_range(10..50);
    let quantity = rng.gen_range(1..=5);
    let item = MARKET_ITEMS
        .choose(rng)
        .copied()
        .unwrap_or("Rice")
        .to_string();

    MathProblem {
        item,
        price_per_kg,
        quantity,
        correct_answer: price_per_kg * quantity,
    }
}

#[derive(Debug, Deserialize)]
pub struct ShotRequest {
    angle: f64,
    force: f64,
}

#[derive(Debug, Serialize)]
pub struct ShotResponse {
    distance: f64,
    result: String,
}

/// `POST /api/physics/shot` - 抛体距离判定
pub async fn physics_shot(Json(request): Json<ShotRequest>) -> Json<ShotResponse> {
    Json(grade_shot(request.angle, request.force))
}

fn grade_shot(angle_deg: f64, force: f64) -> ShotResponse {
    let angle = angle_deg.to_radians();
    let distance = force.powi(2) * (2.0 * angle).sin() / 9.8;

    let result = if distance > 70.0 {
        "SIX! 🏏"
    } else if distance > 35.0 {
        "FOUR! 🏃"
    } else {
        "CAUGHT! 👐"
    };

    ShotResponse {
        distance,
        result: result.to_string(),
    }
}

#[derive(Debug, Deserialize)]
pub struct RunRequest {
    #[serde(default)]
    commands: Vec<i32>,
}

#[derive(Debug, Serialize)]
pub struct RunResponse {
    status: String,
}

/// `POST /api/tech/run` - 固定网格寻路模拟
pub async fn tech_run(Json(request): Json<RunRequest>) -> Json<RunResponse> {
    Json(RunResponse {
        status: simulate_grid(&request.commands).to_string(),
    })
}

/// 指令：0 上，1 下，2 左，3 右。越界或撞障碍 CRASH，走到终点 WIN。
fn simulate_grid(commands: &[i32]) -> &'static str {
    let (mut row, mut col): (i32, i32) = (0, 0);

    for &command in commands {
        match command {
            0 => row -= 1,
            1 => row += 1,
            2 => col -= 1,
            3 => col += 1,
            _ => {}
        }

        if !(0..3).contains(&row) || !(0..3).contains(&col) {
            return "CRASH";
        }
        match GRID[row as usize][col as usize] {
            1 => return "CRASH",
            3 => return "WIN",
            _ => {}
        }
    }

    "Lost"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_problem_ranges() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let problem = random_problem(&mut rng);
            assert!((10..50).contains(&problem.price_per_kg));
            assert!((1..=5).contains(&problem.quantity));
            assert_eq!(problem.correct_answer, problem.price_per_kg * problem.quantity);
            assert!(MARKET_ITEMS.contains(&problem.item.as_str()));
        }
    }

    #[test]
    fn test_grade_shot_six() {
        // 45 度、力度 30: 900 / 9.8 ≈ 91.8
        let shot = grade_shot(45.0, 30.0);
        assert!(shot.distance > 70.0);
        assert_eq!(shot.result, "SIX! 🏏");
    }

    #[test]
    fn test_grade_shot_four() {
        // 45 度、力度 20: 400 / 9.8 ≈ 40.8
        let shot = grade_shot(45.0, 20.0);
        assert!(shot.distance > 35.0 && shot.distance <= 70.0);
        assert_eq!(shot.result, "FOUR! 🏃");
    }

    #[test]
    fn test_grade_shot_caught() {
        let shot = grade_shot(45.0, 10.0);
        assert!(shot.distance <= 35.0);
        assert_eq!(shot.result, "CAUGHT! 👐");
    }

    #[test]
    fn test_simulate_grid_win_path() {
        // 右右下下：(0,1) → (0,2) → (1,2) → (2,2) 终点
        assert_eq!(simulate_grid(&[3, 3, 1, 1]), "WIN");
    }

    #[test]
    fn test_simulate_grid_crash_on_obstacle() {
        // 向下一步撞上 (1,0) 的障碍
        assert_eq!(simulate_grid(&[1]), "CRASH");
    }

    #[test]
    fn test_simulate_grid_crash_out_of_bounds() {
        assert_eq!(simulate_grid(&[0]), "CRASH");
        assert_eq!(simulate_grid(&[2]), "CRASH");
    }

    #[test]
    fn test_simulate_grid_lost_without_goal() {
        assert_eq!(simulate_grid(&[]), "Lost");
        assert_eq!(simulate_grid(&[3, 2, 3, 2]), "Lost");
    }
}
