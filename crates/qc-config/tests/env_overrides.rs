use figment::Jail;
use qc_config::QcConfig;

#[test]
fn env_overrides_nested_values() {
    Jail::expect_with(|jail| {
        jail.set_env("QCLIST_GENERAL__DEFAULT_LIMIT", "3");
        jail.set_env("QCLIST_EXPORT__OUTPUT_DIR", "/tmp/qc");

        let config = QcConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 3);
        assert_eq!(config.export.output_dir, "/tmp/qc");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".qclist")?;
        jail.create_file(
            ".qclist/config.toml",
            "[general]\ndefault_module = \"Quality Control\"\n",
        )?;
        jail.set_env("QCLIST_GENERAL__DEFAULT_MODULE", "Environmental Controls");

        let config = QcConfig::load().expect("config loads");
        assert_eq!(
            config.general.module_filter().as_deref(),
            Some("Environmental Controls")
        );
        Ok(())
    });
}

#[test]
fn log_filter_variable_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("QCLIST_LOG", "debug");
        let config = QcConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 20);
        Ok(())
    });
}
