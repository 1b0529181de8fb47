use envconfig::Envconfig;

#[derive(Envconfig, Clone, Debug)]
pub struct ScaleConfig {
    /// Upper bound on how many worker nodes a single scale operation may
    /// add or remove.
    /// Env: KADM_SCALE_MAX_NODES_PER_OP
    #[envconfig(from = "KADM_SCALE_MAX_NODES_PER_OP", default = "15")]
    pub max_nodes_per_operation: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cap() {
        let cfg =
            ScaleConfig::init_from_hashmap(&std::collections::HashMap::new())
                .unwrap();
        assert_eq!(cfg.max_nodes_per_operation, 15);
    }
}
