//! Properties of enabling maintenance mode on a real filesystem.

use proptest::prelude::*;

use sitemode::domain::ports::NoopEventSink;
use sitemode::presentation::factory::create_maintenance_use_case;
use sitemode::{Config, ContentHash, MaintenanceOptions, SiteConfig};

fn setup(html: &[u8], icon: &[u8]) -> (tempfile::TempDir, SiteConfig) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("web")).unwrap();
    std::fs::write(dir.path().join("web/maintenance.html"), html).unwrap();
    std::fs::write(dir.path().join("web/favicon.png"), icon).unwrap();
    let site = SiteConfig::new(dir.path(), Config::default());
    (dir, site)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: published files are byte-identical to the bundle.
    #[test]
    fn property_published_bytes_match_sources(
        html in proptest::collection::vec(any::<u8>(), 0..2048),
        icon in proptest::collection::vec(any::<u8>(), 0..2048),
        existing in proptest::option::of(proptest::collection::vec(any::<u8>(), 0..512)),
    ) {
        let (_dir, site) = setup(&html, &icon);
        if let Some(previous) = &existing {
            std::fs::create_dir_all(site.publish_dir()).unwrap();
            std::fs::write(site.published_index(), previous).unwrap();
        }

        let result = create_maintenance_use_case(&site)
            .execute(&site, &MaintenanceOptions::new(), &NoopEventSink)
            .unwrap();

        prop_assert_eq!(std::fs::read(site.published_index()).unwrap(), html.clone());
        prop_assert_eq!(std::fs::read(site.published_icon()).unwrap(), icon);
        prop_assert_eq!(&result.files[0].hash, &ContentHash::from_bytes(&html));
    }

    /// PROPERTY: running twice leaves the same tree as running once.
    #[test]
    fn property_enable_is_idempotent(
        html in proptest::collection::vec(any::<u8>(), 0..1024),
        icon in proptest::collection::vec(any::<u8>(), 0..1024),
    ) {
        let (_dir, site) = setup(&html, &icon);
        let use_case = create_maintenance_use_case(&site);
        let options = MaintenanceOptions::new();

        use_case.execute(&site, &options, &NoopEventSink).unwrap();
        let once = snapshot(&site);
        let second = use_case.execute(&site, &options, &NoopEventSink).unwrap();

        prop_assert!(!second.created_dir);
        prop_assert_eq!(snapshot(&site), once);
    }
}

fn snapshot(site: &SiteConfig) -> Vec<(String, Vec<u8>)> {
    let mut entries: Vec<(String, Vec<u8>)> = std::fs::read_dir(site.publish_dir())
        .unwrap()
        .map(|e| {
            let e = e.unwrap();
            (
                e.file_name().to_string_lossy().to_string(),
                std::fs::read(e.path()).unwrap(),
            )
        })
        .collect();
    entries.sort();
    entries
}
