use whip_config::WhipConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &WhipConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &WhipConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if config.corpus.root.as_os_str().is_empty() && has_env_prefix(&env_keys, "WHIP_CORPUS") {
        warnings.push(
            "Corpus root is unset while WHIP_CORPUS* env vars exist. Use double underscores (example: WHIP_CORPUS__ROOT)."
                .to_string(),
        );
    }

    if config.analysis.legislator_id.is_empty() && has_env_prefix(&env_keys, "WHIP_ANALYSIS") {
        warnings.push(
            "Legislator id is unset while WHIP_ANALYSIS* env vars exist. Use double underscores (example: WHIP_ANALYSIS__LEGISLATOR_ID)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
