//! Settings layering: defaults, settings file, then `ANN_` environment.

use annparams::config::CONFIG_DIR;
use annparams::params::KMeansIndexParams;
use annparams::{AlgorithmId, CentersInit, LogLevel, Settings, create_from_parameters};
use figment::Jail;

fn to_figment_error(err: impl std::fmt::Display) -> figment::Error {
    figment::Error::from(err.to_string())
}

#[test]
fn test_environment_overrides_file() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(CONFIG_DIR).map_err(to_figment_error)?;
        jail.create_file(
            format!("{CONFIG_DIR}/settings.toml"),
            r#"
                log_level = "error"

                [index]
                algorithm = "kmeans"
                branching = 16

                [search]
                checks = 64
            "#,
        )?;
        jail.set_env("ANN_INDEX__BRANCHING", "48");
        jail.set_env("ANN_INDEX__CENTERS_INIT", "kmeanspp");
        jail.set_env("ANN_LOG_LEVEL", "warn");

        let settings = Settings::load().map_err(to_figment_error)?;
        assert_eq!(settings.index.algorithm, AlgorithmId::KMEANS);
        assert_eq!(settings.index.branching, 48);
        assert_eq!(settings.index.centers_init, CentersInit::KMEANSPP);
        assert_eq!(settings.search.checks, 64);
        assert_eq!(settings.log_level, LogLevel::WARN);

        let params = create_from_parameters(&settings.to_parameters()).map_err(to_figment_error)?;
        let kmeans = params.downcast_ref::<KMeansIndexParams>().unwrap();
        assert_eq!(kmeans.branching, 48);
        assert_eq!(kmeans.iterations, 11);

        Ok(())
    });
}

#[test]
fn test_load_finds_config_in_parent_directory() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(CONFIG_DIR).map_err(to_figment_error)?;
        jail.create_file(
            format!("{CONFIG_DIR}/settings.toml"),
            "[index]\nalgorithm = \"composite\"\ntrees = 2\n",
        )?;
        std::fs::create_dir_all("nested/deeper").map_err(to_figment_error)?;
        std::env::set_current_dir(jail.directory().join("nested/deeper"))
            .map_err(to_figment_error)?;

        let settings = Settings::load().map_err(to_figment_error)?;
        assert_eq!(settings.index.algorithm, AlgorithmId::COMPOSITE);
        assert_eq!(settings.index.trees, 2);
        assert_eq!(settings.index.branching, 32);

        Ok(())
    });
}

#[test]
fn test_missing_file_yields_defaults() {
    Jail::expect_with(|_jail| {
        let settings = Settings::load().map_err(to_figment_error)?;
        assert_eq!(settings, Settings::default());
        Ok(())
    });
}

#[test]
fn test_numeric_environment_tag() {
    Jail::expect_with(|jail| {
        jail.set_env("ANN_INDEX__ALGORITHM", "255");

        let settings = Settings::load().map_err(to_figment_error)?;
        assert_eq!(settings.index.algorithm, AlgorithmId::AUTOTUNED);

        Ok(())
    });
}

#[test]
fn test_init_then_load() {
    Jail::expect_with(|_jail| {
        let path = Settings::init_config_file(false).map_err(to_figment_error)?;
        assert!(path.exists());

        let settings = Settings::load().map_err(to_figment_error)?;
        assert_eq!(settings, Settings::default());

        assert!(Settings::init_config_file(false).is_err());
        Settings::init_config_file(true).map_err(to_figment_error)?;

        Ok(())
    });
}
