//! End-to-end scenarios: fixture roots on disk are loaded, merged and
//! serialized the way the UI backend serves them.

use std::sync::Arc;
use std::thread;

use leitstand_core::{Error, Leitstand};
use leitstand_fs::{ConfigStore, NormalizedPath};
use leitstand_model::{Contribution, ModuleDescriptor};
use leitstand_test_utils::TestUi;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

const INVENTORY: &str = r#"
module: inventory
scopesAllowed: [ivt]
applications:
  - application: inventory
    defer: true
menus:
  - menu: elements
    label: Elements
    items:
      - item: element-list
        view: elements.html
  - menu: element
    entity: element_name
    query:
      element: "{{element_id}}"
    items:
      - item: element-settings
        view: element.html
      - item: element-ports
        view: ports.html
        query:
          sort: ifp_name
"#;

const IMAGE: &str = r#"
module: image
menus:
  - menu: images
    items:
      - item: image-list
        view: images.html
"#;

const PODS: &str = r#"
baseUri: /pods
controller: pods.js
name: pods
category: Pods
scopesAllowed: [ivt.pods]
config:
  refresh: 30
extensions:
  - extend:
      module: inventory
      menu: element
      after: element-settings
    items:
      - item: element-pods
        view: pods.html
      - item: element-pod-ports
        view: pod-ports.html
        config:
          refresh: 5
  - extend:
      module: inventory
      after: elements
    menus:
      - menu: pods
        query:
          group: default
        items:
          - item: pod-list
            view: pod-list.html
  - extend:
      module: pods
      after: inventory
    mainMenu:
      module: pods
      title: Pods
      label: Pods
      path: /pods/pods.html
"#;

const METRICS: &str = r#"
baseUri: https://metrics.example.com/ui
extensions:
  - extend:
      module: inventory
      menu: element
      before: element-settings
    items:
      - item: element-health
        view: health.html
  - extend:
      module: inventory
      menu: pods
      after: pod-list
    items:
      - item: pod-metrics
        view: /metrics/pods.html
"#;

const BROKEN: &str = r#"
name: broken
extensions:
  - extend:
      module: inventory
      menu: element
    items:
      - item: missing-view
"#;

const MAIN_MENU: &str = r#"
menu:
  - module: inventory
    title: Inventory
    label: Inventory
    path: /inventory/elements.html
    scopesAllowed: [ivt]
  - module: image
    title: Images
    label: Images
    path: /image/images.html
"#;

fn fixture() -> TestUi {
    TestUi::new()
        .module("inventory", INVENTORY)
        .module("image", IMAGE)
        .contribution("10-pods.yaml", PODS)
        .contribution("20-metrics.yml", METRICS)
        .contribution("30-broken.yaml", BROKEN)
        .main_menu(MAIN_MENU)
}

fn item_names(descriptor: &ModuleDescriptor, menu: &str) -> Vec<String> {
    descriptor
        .find_menu(menu)
        .unwrap()
        .items()
        .iter()
        .map(|i| i.item().to_string())
        .collect()
}

#[test]
fn test_inventory_is_merged_with_all_contributions() {
    let ui = fixture();
    let leitstand = Leitstand::open(ui.root()).unwrap();

    // The broken contribution is skipped, the other two are loaded in file order.
    let names: Vec<_> = leitstand
        .contributions()
        .iter()
        .map(|c| c.name().or(c.base_uri()).unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, vec!["pods", "https://metrics.example.com/ui"]);

    let inventory = leitstand.module_descriptor("inventory").unwrap().unwrap();
    let menus: Vec<_> = inventory.menus().iter().map(|m| m.menu()).collect();
    assert_eq!(menus, vec!["elements", "pods", "element"]);
    assert_eq!(
        item_names(&inventory, "element"),
        vec![
            "element-health",
            "element-settings",
            "element-pods",
            "element-pod-ports",
            "element-ports",
        ]
    );
    assert_eq!(item_names(&inventory, "pods"), vec!["pod-list", "pod-metrics"]);
}

#[test]
fn test_merged_inventory_json() {
    let ui = fixture();
    let leitstand = Leitstand::open(ui.root()).unwrap();
    let json: Value =
        serde_json::from_str(&leitstand.module_descriptor_json("inventory").unwrap().unwrap())
            .unwrap();

    assert_eq!(json["module"], "inventory");
    assert_eq!(json["scopesAllowed"], json!(["ivt"]));
    assert_eq!(
        json["applications"],
        json!([
            { "application": "inventory", "controller": "controller.js", "defer": true },
            { "application": "pods", "controller": "/pods/pods.js", "defer": false },
            {
                "application": "https://metrics.example.com/ui",
                "controller": "https://metrics.example.com/ui/controller.js",
                "defer": false
            },
        ])
    );

    let element = &json["menus"][2];
    assert_eq!(element["entity"], "element_name");
    assert_eq!(
        element["items"][0],
        json!({
            "item": "element-health",
            "label": "element-health",
            "query": { "element": "{{element_id}}" },
            "view": "https://metrics.example.com/ui/health.html",
        })
    );
    assert_eq!(
        element["items"][3],
        json!({
            "item": "element-pod-ports",
            "label": "element-pod-ports",
            "category": "Pods",
            "query": { "element": "{{element_id}}" },
            "scopesAllowed": ["ivt.pods"],
            "config": { "refresh": 5 },
            "view": "/pods/pod-ports.html",
        })
    );
    assert_eq!(
        element["items"][4]["query"],
        json!({ "element": "{{element_id}}", "sort": "ifp_name" })
    );

    let pods = &json["menus"][1];
    assert_eq!(pods["config"], json!({ "refresh": 30 }));
    assert_eq!(pods["items"][1]["view"], "/metrics/pods.html");
    assert_eq!(pods["items"][1]["query"], json!({ "group": "default" }));
}

#[test]
fn test_main_menu_and_welcome_module() {
    let ui = fixture();
    let leitstand = Leitstand::open(ui.root()).unwrap();

    let modules: Vec<_> = leitstand.main_menu().items().iter().map(|i| i.module()).collect();
    assert_eq!(modules, vec!["inventory", "pods", "image"]);
    assert_eq!(leitstand.welcome_module().map(|i| i.module()), Some("inventory"));

    let json = serde_json::to_value(leitstand.main_menu()).unwrap();
    assert_eq!(json["menu"][0]["scopes"], json!(["ivt"]));
    assert!(json["menu"][0].get("welcome").is_none());
}

#[test]
fn test_uncontributed_module_and_unknown_module() {
    let ui = fixture();
    let leitstand = Leitstand::open(ui.root()).unwrap();

    let image = leitstand.module_descriptor("image").unwrap().unwrap();
    assert!(image.applications().is_empty());
    assert_eq!(item_names(&image, "images"), vec!["image-list"]);

    assert!(leitstand.module_descriptor("admin").unwrap().is_none());
}

#[test]
fn test_preload_caches_every_module() {
    let ui = fixture();
    let leitstand = Leitstand::open(ui.root()).unwrap();

    assert_eq!(leitstand.modules().preload().unwrap(), 2);
    assert_eq!(leitstand.modules().cached_modules(), vec!["image", "inventory"]);
}

#[test]
fn test_invalid_module_descriptor_is_reported() {
    let ui = fixture().module("broken", "module: broken\nmenus:\n  - items: []\n");
    let leitstand = Leitstand::open(ui.root()).unwrap();

    match leitstand.module_descriptor("broken") {
        Err(Error::ModuleLoad { module, reason }) => {
            assert_eq!(module, "broken");
            assert!(reason.contains("'menu'"), "{reason}");
        }
        other => panic!("expected module load error, got {other:?}"),
    }
}

#[test]
fn test_concurrent_lookups_share_one_descriptor() {
    let ui = fixture();
    let leitstand = Arc::new(Leitstand::open(ui.root()).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let leitstand = Arc::clone(&leitstand);
            thread::spawn(move || leitstand.module_descriptor("inventory").unwrap().unwrap())
        })
        .collect();
    let descriptors: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(descriptors.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    assert_eq!(leitstand.modules().cached_modules(), vec!["inventory"]);
}

#[test]
fn test_builtin_contributions_come_first() {
    let ui = fixture();
    let builtin = Contribution::from_yaml(
        r#"
name: builtin
extensions:
  - extend:
      module: inventory
      menu: element
      after: element-settings
    items:
      - item: element-builtin
        view: /builtin/view.html
"#,
    )
    .unwrap();
    let leitstand = Leitstand::open_with(ui.root(), [builtin]).unwrap();

    assert_eq!(leitstand.contributions().iter().next().and_then(|c| c.name()), Some("builtin"));
    let inventory = leitstand.module_descriptor("inventory").unwrap().unwrap();
    // Both anchor after element-settings; the later contribution ends up closest.
    assert_eq!(
        item_names(&inventory, "element"),
        vec![
            "element-health",
            "element-settings",
            "element-pods",
            "element-pod-ports",
            "element-builtin",
            "element-ports",
        ]
    );
}

#[test]
fn test_exported_descriptor_round_trips() {
    let ui = fixture();
    let leitstand = Leitstand::open(ui.root()).unwrap();
    let inventory = leitstand.module_descriptor("inventory").unwrap().unwrap();

    let path = NormalizedPath::new(ui.root()).join("export/inventory.yaml");
    ConfigStore::new().save(&path, inventory.as_ref()).unwrap();
    let exported: Value = ConfigStore::new().load(&path).unwrap();

    assert_eq!(exported, serde_json::to_value(inventory.as_ref()).unwrap());
}
