//! Guildhall Headless Rules Harness
//!
//! Validates the pure game rules and catalog data without SpacetimeDB.
//! Runs entirely in-process: no DB, no networking.
//!
//! Usage:
//!   cargo run -p guildhall-simtest
//!   cargo run -p guildhall-simtest -- --verbose

use guildhall_logic::adventure::{cooldown_remaining_secs, tier_requirements, WATER_ITEM};
use guildhall_logic::catalog::{self, ItemCategory, ItemKind};
use guildhall_logic::crafting::{self, CraftAttempt, CraftOutcome};
use guildhall_logic::economy;
use guildhall_logic::gathering::{self, GatherCategory};
use guildhall_logic::guild::{self, MemberStanding};
use guildhall_logic::rank;
use guildhall_logic::skills;
use guildhall_logic::tier::Tier;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: String) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail,
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Guildhall Rules Harness ===\n");

    let mut results = Vec::new();

    results.extend(validate_catalog(verbose));
    results.extend(validate_crafting(verbose));
    results.extend(validate_progression(verbose));
    results.extend(validate_rank_ladder(verbose));
    results.extend(validate_gathering(verbose));
    results.extend(validate_guild_ladder(verbose));
    results.extend(validate_economy(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Catalog ──────────────────────────────────────────────────────────

fn validate_catalog(_verbose: bool) -> Vec<TestResult> {
    println!("--- Catalog ---");
    let mut results = Vec::new();

    let dangling: Vec<&str> = catalog::RECIPES
        .iter()
        .flat_map(|r| r.ingredients.iter().map(|(name, _)| *name))
        .chain(catalog::RECIPES.iter().map(|r| r.output))
        .filter(|name| catalog::find_item(name).is_none())
        .collect();
    results.push(check(
        "recipes_resolve",
        dangling.is_empty(),
        if dangling.is_empty() {
            format!("{} recipes, every name resolves", catalog::RECIPES.len())
        } else {
            format!("dangling names: {}", dangling.join(", "))
        },
    ));

    let monsterless: Vec<Tier> = Tier::ALL
        .into_iter()
        .filter(|t| !catalog::MONSTERS.iter().any(|m| m.tier == *t))
        .collect();
    results.push(check(
        "monsters_per_tier",
        monsterless.is_empty(),
        format!(
            "{} monsters over {} tiers",
            catalog::MONSTERS.len(),
            Tier::ALL.len() - monsterless.len()
        ),
    ));

    let water_ok = catalog::find_item(WATER_ITEM)
        .map(|i| i.category == ItemCategory::Food)
        .unwrap_or(false);
    results.push(check(
        "water_item_present",
        water_ok,
        format!("\"{WATER_ITEM}\" is a food-category item"),
    ));

    let empty_shops: Vec<&str> = catalog::SHOPS
        .iter()
        .filter(|s| !catalog::ITEMS.iter().any(|i| i.category == s.category))
        .map(|s| s.name)
        .collect();
    results.push(check(
        "shops_stocked",
        empty_shops.is_empty(),
        format!("{} shops, all with inventory", catalog::SHOPS.len()),
    ));

    results
}

// ── 2. Crafting resolution ──────────────────────────────────────────────

fn validate_crafting(_verbose: bool) -> Vec<TestResult> {
    println!("--- Crafting ---");
    let mut results = Vec::new();

    // Chance stays within [0,100] for every recipe at any level.
    let mut bad_chance = 0;
    for recipe in catalog::RECIPES {
        for level in 1..=120 {
            let c = crafting::final_chance(recipe.success_rate, recipe.min_skill_level, level);
            if c > 100 {
                bad_chance += 1;
            }
        }
    }
    results.push(check(
        "chance_bounded",
        bad_chance == 0,
        format!("{} out-of-range chances", bad_chance),
    ));

    // A guaranteed recipe never fails across a long seeded run.
    let attempt = CraftAttempt {
        base_success_rate: 100,
        min_skill_level: 1,
        skill_level: 1,
        xp_reward: 20,
    };
    let mut rng = StdRng::seed_from_u64(1);
    let failures = (0..1000)
        .filter(|_| crafting::resolve(&attempt, 2, &mut rng).outcome != CraftOutcome::Success)
        .count();
    results.push(check(
        "guaranteed_success",
        failures == 0,
        format!("{failures} failures in 1000 guaranteed crafts"),
    ));

    // A risky craft with no pool never reports a downgrade.
    let risky = CraftAttempt {
        base_success_rate: 10,
        min_skill_level: 1,
        skill_level: 1,
        xp_reward: 50,
    };
    let mut rng = StdRng::seed_from_u64(2);
    let mut downgrades = 0;
    let mut fails = 0;
    for _ in 0..1000 {
        match crafting::resolve(&risky, 0, &mut rng).outcome {
            CraftOutcome::Downgrade => downgrades += 1,
            CraftOutcome::Fail => fails += 1,
            CraftOutcome::Success => {}
        }
    }
    results.push(check(
        "no_pool_no_downgrade",
        downgrades == 0 && fails > 0,
        format!("{downgrades} downgrades, {fails} fails"),
    ));

    results
}

// ── 3. Skill progression ────────────────────────────────────────────────

fn validate_progression(_verbose: bool) -> Vec<TestResult> {
    println!("--- Skill progression ---");
    let mut results = Vec::new();

    // Grind Training Swords (20 xp each): levels only ever move up by
    // one, xp stays under the old threshold's carry.
    let mut level = 1;
    let mut xp = 0;
    let mut single_step = true;
    for _ in 0..200 {
        let next = skills::apply_skill_xp(level, xp, 20);
        if next.level > level + 1 {
            single_step = false;
        }
        level = next.level;
        xp = next.xp;
    }
    results.push(check(
        "single_step_levels",
        single_step,
        format!("200 crafts ended at level {level} ({xp} xp)"),
    ));

    // A windfall can strand xp above the next threshold by design.
    let windfall = skills::apply_skill_xp(1, 0, 450);
    results.push(check(
        "windfall_carries_remainder",
        windfall.level == 2 && windfall.xp == 350,
        format!("level {} with {} xp carried", windfall.level, windfall.xp),
    ));

    results
}

// ── 4. Rank ladder ──────────────────────────────────────────────────────

fn validate_rank_ladder(_verbose: bool) -> Vec<TestResult> {
    println!("--- Rank ladder ---");
    let mut results = Vec::new();

    // Grind tier-F adventures from a fresh profile until rank D.
    let mut state = rank::RankProgress {
        rank: Tier::F,
        level: 1,
        xp: 0,
    };
    let per_claim = tier_requirements(Tier::F).xp;
    let mut claims = 0;
    while state.rank == Tier::F && claims < 10_000 {
        state = rank::apply_adventure_xp(state.rank, state.level, state.xp, per_claim);
        claims += 1;
    }
    // 100 levels at 100 xp each, 50 xp per claim: exactly 200 claims.
    results.push(check(
        "f_to_d_in_200_claims",
        state.rank == Tier::D && claims == 200,
        format!("rank {} after {claims} claims", state.rank),
    ));

    // The cooldown gates every one of those claims.
    results.push(check(
        "cooldown_five_minutes",
        cooldown_remaining_secs(0) == Some(300) && cooldown_remaining_secs(300_000).is_none(),
        "300s after a claim, open at 300000ms".into(),
    ));

    // S-rank caps: a huge gain at the top discards the excess.
    let capped = rank::apply_adventure_xp(Tier::S, 100, 0, 1_000_000);
    results.push(check(
        "s_rank_caps",
        capped.rank == Tier::S && capped.level == 100 && capped.xp == 0,
        format!("S {}/{} with {} xp", capped.level, 100, capped.xp),
    ));

    results
}

// ── 5. Gathering ────────────────────────────────────────────────────────

fn validate_gathering(_verbose: bool) -> Vec<TestResult> {
    println!("--- Gathering ---");
    let mut results = Vec::new();

    let mut rng = StdRng::seed_from_u64(3);
    let mut all_bounded = true;
    for category in GatherCategory::ALL {
        let eligible = catalog::ITEMS
            .iter()
            .filter(|i| i.kind == ItemKind::Material && i.category == category.item_category())
            .filter(|i| gathering::unlock_level(category, i.name) == Some(1))
            .count();
        for _ in 0..500 {
            match gathering::resolve(eligible, 1, &mut rng) {
                Some(r) => {
                    if r.pick >= eligible || !(1..=3).contains(&r.quantity) || r.xp_gained != 12 {
                        all_bounded = false;
                    }
                }
                None => all_bounded = false,
            }
        }
    }
    results.push(check(
        "rewards_bounded",
        all_bounded,
        "2000 gathers stayed within pick/quantity/xp bounds".into(),
    ));

    results
}

// ── 6. Guild ladder ─────────────────────────────────────────────────────

fn validate_guild_ladder(_verbose: bool) -> Vec<TestResult> {
    println!("--- Guild ladder ---");
    let mut results = Vec::new();

    // Requirements tighten monotonically over the whole climb.
    let mut monotonic = true;
    for next_class in (1..=11).rev() {
        let easier = guild::required_adventures(next_class + 1);
        let harder = guild::required_adventures(next_class);
        if harder <= easier && next_class < 11 {
            monotonic = false;
        }
        if guild::required_rank(next_class) < guild::required_rank(next_class + 1) {
            monotonic = false;
        }
    }
    results.push(check(
        "ladder_monotonic",
        monotonic,
        format!(
            "class 11 needs {}, class 1 needs {}",
            guild::required_adventures(11),
            guild::required_adventures(1)
        ),
    ));

    // A maxed roster can climb the entire ladder.
    let roster = [
        MemberStanding {
            rank: Tier::S,
            completed_adventures: 30,
        },
        MemberStanding {
            rank: Tier::S,
            completed_adventures: 30,
        },
    ];
    let blocked = (1..=11)
        .filter(|next| guild::check_promotion(*next, &roster).is_err())
        .count();
    results.push(check(
        "maxed_roster_climbs",
        blocked == 0,
        format!("{blocked} classes blocked for an all-S roster"),
    ));

    results
}

// ── 7. Economy ──────────────────────────────────────────────────────────

fn validate_economy(_verbose: bool) -> Vec<TestResult> {
    println!("--- Economy ---");
    let mut results = Vec::new();

    // Selling always pays less than the cheapest possible restock price.
    let mut inverted = 0;
    for item in catalog::ITEMS {
        let sell = economy::sell_price(item.base_price);
        let floor_buy = item.base_price * 8 / 10;
        if sell > floor_buy {
            inverted += 1;
        }
    }
    results.push(check(
        "no_arbitrage_floor",
        inverted == 0,
        format!("{inverted} items sell above the restock floor"),
    ));

    let mut rng = StdRng::seed_from_u64(4);
    let mut out_of_range = 0;
    for _ in 0..1000 {
        let qty = economy::restock_quantity(&mut rng);
        if !(10..60).contains(&qty) {
            out_of_range += 1;
        }
        let price = economy::restock_price(100, &mut rng);
        if !(80..120).contains(&price) {
            out_of_range += 1;
        }
    }
    results.push(check(
        "restock_rolls_bounded",
        out_of_range == 0,
        format!("{out_of_range} rolls out of range"),
    ));

    results
}
