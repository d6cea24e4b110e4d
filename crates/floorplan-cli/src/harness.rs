//! Headless sweep: generates every apartment type across the area range and
//! both orientations, then checks allocation, geometry, rendering and the
//! worker cache policy. Runs entirely in-process, no files written.

use floorplan_logic::allocation::allocate;
use floorplan_logic::constants::{defaults, floors};
use floorplan_logic::geometry::{hard_errors, validate_all, Severity};
use floorplan_logic::offline_cache::{self, FetchStrategy, WorkerMessage, WorkerReply};
use floorplan_logic::template::{apartment_types, resolve};
use floorplan_logic::{generate_plan, GenerationRequest, Orientation};
use floorplan_render::export::{export_stem, DEFAULT_STEM};
use floorplan_render::{print_document, render_svg, room_details, PlanHeader, SceneStyle};

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

/// Run every section. Returns false if anything failed.
pub fn run(verbose: bool) -> bool {
    println!("=== Floor Plan Harness ===\n");

    let mut results = Vec::new();

    // 1. Template table
    results.extend(validate_templates());

    // 2. Area allocation sweep
    results.extend(validate_allocation());

    // 3. Layout geometry sweep
    results.extend(validate_layouts(verbose));

    // 4. Rendering and export
    results.extend(validate_rendering());

    // 5. Offline worker policy
    results.extend(validate_cache_policy());

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

    failed == 0
}

// ── 1. Templates ────────────────────────────────────────────────────────

fn validate_templates() -> Vec<TestResult> {
    println!("--- Templates ---");
    let mut results = Vec::new();
    let types = apartment_types();

    results.push(TestResult {
        name: "templates_known".into(),
        passed: types.len() == 6,
        detail: format!("{} apartment types: {}", types.len(), types.join(", ")),
    });

    let no_bath: Vec<_> = types
        .iter()
        .filter(|t| resolve(t).bathroom_count == 0)
        .collect();
    results.push(TestResult {
        name: "templates_have_bathroom".into(),
        passed: no_bath.is_empty(),
        detail: if no_bath.is_empty() {
            "every type has at least one bathroom".into()
        } else {
            format!("without bathroom: {:?}", no_bath)
        },
    });

    let fallback = resolve("9+9");
    results.push(TestResult {
        name: "templates_fallback".into(),
        passed: fallback == resolve(defaults::APARTMENT_TYPE),
        detail: format!("unknown label → {:?}", fallback),
    });

    results
}

// ── 2. Allocation ───────────────────────────────────────────────────────

fn validate_allocation() -> Vec<TestResult> {
    println!("--- Area Allocation ---");
    let mut results = Vec::new();
    let mut floor_violations = Vec::new();
    let mut sum_mismatches = Vec::new();
    let mut cases = 0;

    for label in apartment_types() {
        let t = resolve(label);
        for total in defaults::AREA_MIN..=defaults::AREA_MAX {
            cases += 1;
            let a = allocate(total, &t);
            if a.living_room < floors::LIVING_ROOM
                || a.kitchen < floors::KITCHEN
                || a.bathroom < floors::BATHROOM
                || (t.bedroom_count > 0 && a.bedroom < floors::BEDROOM)
            {
                floor_violations.push(format!("{}@{}", label, total));
            }
            // Residue lands in the salon unless its floor binds.
            if a.living_room > floors::LIVING_ROOM && a.total_for(&t) != total {
                sum_mismatches.push(format!("{}@{}", label, total));
            }
        }
    }

    results.push(TestResult {
        name: "allocation_floors".into(),
        passed: floor_violations.is_empty(),
        detail: if floor_violations.is_empty() {
            format!("{} cases respect minimum room sizes", cases)
        } else {
            format!("below floor: {}", floor_violations.join(", "))
        },
    });

    results.push(TestResult {
        name: "allocation_sum".into(),
        passed: sum_mismatches.is_empty(),
        detail: if sum_mismatches.is_empty() {
            format!("{} cases sum to the requested total", cases)
        } else {
            format!("sum mismatch: {}", sum_mismatches.join(", "))
        },
    });

    results
}

// ── 3. Layouts ──────────────────────────────────────────────────────────

fn validate_layouts(verbose: bool) -> Vec<TestResult> {
    println!("--- Layouts ---");
    let mut results = Vec::new();
    let mut errors = Vec::new();
    let mut count_mismatches = Vec::new();
    let mut warnings = 0;
    let mut plans = 0;

    for label in apartment_types() {
        for facing in [1, 2] {
            for total in (defaults::AREA_MIN..=defaults::AREA_MAX).step_by(10) {
                let plan = generate_plan(&GenerationRequest::new(label, total, facing));
                plans += 1;

                let expected = plan.template.room_count();
                if plan.rooms.len() != expected {
                    count_mismatches.push(format!(
                        "{} facing {}: {} rooms, expected {}",
                        label,
                        facing,
                        plan.rooms.len(),
                        expected
                    ));
                }

                for e in validate_all(&plan.rooms, plan.canvas_width, plan.canvas_height) {
                    match e.severity {
                        Severity::Error => errors.push(format!(
                            "{}@{} {:?}: {}",
                            label, total, plan.orientation, e.message
                        )),
                        Severity::Warning => {
                            warnings += 1;
                            if verbose {
                                println!("  ⚠ {}@{}: {}", label, total, e.message);
                            }
                        }
                    }
                }
            }
        }
    }

    results.push(TestResult {
        name: "layout_room_counts".into(),
        passed: count_mismatches.is_empty(),
        detail: if count_mismatches.is_empty() {
            format!("{} plans have one rect per templated room", plans)
        } else {
            count_mismatches.join("; ")
        },
    });

    results.push(TestResult {
        name: "layout_geometry".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            format!("no overlaps or out-of-bounds rooms ({} warnings)", warnings)
        } else {
            format!("{} errors, first: {}", errors.len(), errors[0])
        },
    });

    let corner = generate_plan(&GenerationRequest::new("3+1", 120, 3));
    let corner_errors = hard_errors(&corner.rooms, corner.canvas_width, corner.canvas_height);
    results.push(TestResult {
        name: "layout_corner_orientation".into(),
        passed: corner.orientation == Orientation::Corner && corner_errors.is_empty(),
        detail: format!("facing 3 → {:?}", corner.orientation),
    });

    results
}

// ── 4. Rendering ────────────────────────────────────────────────────────

fn validate_rendering() -> Vec<TestResult> {
    println!("--- Rendering ---");
    let mut results = Vec::new();

    let plan = generate_plan(&GenerationRequest::new("2+1", 100, 1));
    let svg = render_svg(&plan, &SceneStyle::default());
    let groups = svg.matches("class=\"room-group").count();
    results.push(TestResult {
        name: "render_room_groups".into(),
        passed: groups == plan.rooms.len(),
        detail: format!("{} groups for {} rooms", groups, plan.rooms.len()),
    });

    let hovered = render_svg(&plan, &SceneStyle::hovering(0));
    results.push(TestResult {
        name: "render_hover".into(),
        passed: hovered.matches("brightness(0.9)").count() == 1 && !svg.contains("brightness"),
        detail: "hover highlights exactly one room".into(),
    });

    let details = room_details(&plan);
    results.push(TestResult {
        name: "render_details".into(),
        passed: details.len() == plan.rooms.len(),
        detail: format!("{} room list entries", details.len()),
    });

    let header = PlanHeader::new("", &plan.request, "-");
    let html = print_document(&plan, &header);
    results.push(TestResult {
        name: "render_print_document".into(),
        passed: html.contains("window.print()") && html.contains(&header.specs),
        detail: header.specs.clone(),
    });

    let stems_ok = export_stem("") == DEFAULT_STEM
        && export_stem("  Ev   Planı ") == "Ev-Planı"
        && export_stem(&export_stem("a  b")) == export_stem("a  b")
        && !export_stem("Blok A/Daire 3").contains('/');
    results.push(TestResult {
        name: "export_stem".into(),
        passed: stems_ok,
        detail: "trimmed, hyphenated, single path component".into(),
    });

    results
}

// ── 5. Offline worker ───────────────────────────────────────────────────

fn validate_cache_policy() -> Vec<TestResult> {
    println!("--- Offline Worker ---");
    let mut results = Vec::new();

    let cases = [
        ("GET", "/style.css", FetchStrategy::CacheFirst),
        ("GET", "/index.html", FetchStrategy::CacheFirst),
        ("GET", "/api/plans", FetchStrategy::NetworkFirst),
        ("POST", "/style.css", FetchStrategy::Bypass),
        ("GET", "https://www.google-analytics.com/collect", FetchStrategy::Bypass),
    ];
    let wrong: Vec<_> = cases
        .iter()
        .filter(|(m, u, s)| offline_cache::classify_request(m, u) != *s)
        .map(|(m, u, _)| format!("{} {}", m, u))
        .collect();
    results.push(TestResult {
        name: "worker_classification".into(),
        passed: wrong.is_empty(),
        detail: if wrong.is_empty() {
            format!("{} requests classified", cases.len())
        } else {
            format!("misclassified: {}", wrong.join(", "))
        },
    });

    let reply = offline_cache::handle_message(&WorkerMessage::GetVersion, &[]);
    results.push(TestResult {
        name: "worker_version".into(),
        passed: matches!(
            &reply,
            WorkerReply::Version { version } if version == offline_cache::CACHE_VERSION
        ),
        detail: offline_cache::CACHE_VERSION.into(),
    });

    let stale = offline_cache::stale_caches(&["static-v0.9.0", offline_cache::STATIC_CACHE]);
    results.push(TestResult {
        name: "worker_stale_caches".into(),
        passed: stale == vec!["static-v0.9.0"],
        detail: format!("stale: {:?}", stale),
    });

    results
}
