use fleet_core::prelude::*;
use fleet_core::userdata::{UserDataVars, compose};
use fleet_model::{Platform, Stage};

const SCRIPTS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../scripts");

#[test]
fn every_shipped_template_composes_for_every_stage() {
    let src = DirTemplateSource::new(SCRIPTS_DIR);

    for stage in Stage::ALL {
        let vars = UserDataVars::new(stage, "finch", "us-west-2");
        for platform in Platform::ALL {
            let script = compose(platform, &vars, &src)
                .unwrap_or_else(|e| panic!("{platform}/{stage}: {e}"));

            let label = format!("LABEL_STAGE={}", stage.label());
            assert!(script.contains(&label), "{platform}/{stage} lacks {label}");
            for token in ["<STAGE>", "<REPO>", "<REGION>"] {
                assert!(!script.contains(token), "{platform}/{stage} kept {token}");
            }
            assert!(script.contains("finch"));
            assert!(script.contains("us-west-2"));
        }
    }
}

#[test]
fn release_label_reaches_every_platform() {
    let src = DirTemplateSource::new(SCRIPTS_DIR);
    let vars = UserDataVars::new(Stage::Release, "finch", "us-west-2");

    for platform in Platform::ALL {
        let script = compose(platform, &vars, &src).unwrap();
        assert!(script.contains("LABEL_STAGE=release"), "{platform}");
        assert!(!script.contains("LABEL_STAGE=test"), "{platform}");
    }
}
