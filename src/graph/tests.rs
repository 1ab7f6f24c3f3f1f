// src/graph/tests.rs
//! Pipeline tests over parser, classifier, builder and both detectors.

#[cfg(test)]
#[allow(clippy::indexing_slicing)] // Safe in tests with prior assertions
mod pipeline {
    use std::path::{Path, PathBuf};

    use crate::config::ParserConfig;
    use crate::graph::{
        classify_path, detect_cycles, detect_violations, module_from_path, DependencyGraph,
        Layer, SourceParser, SourceUnit, ViolationKind,
    };

    /// Parses `(relative path, content)` pairs the way the engine does.
    fn build(files: &[(&str, &str)]) -> DependencyGraph {
        let parser = SourceParser::new(&ParserConfig::default(), "com.acme.module.")
            .unwrap_or_else(|e| panic!("{e}"));
        let units: Vec<SourceUnit> = files
            .iter()
            .map(|(path, content)| {
                let path = Path::new(path);
                let parsed = parser
                    .parse_content(path, content)
                    .unwrap_or_else(|e| panic!("{e}"));
                SourceUnit {
                    symbol: parsed.symbol,
                    path: PathBuf::from(path),
                    layer: classify_path(path),
                    module: module_from_path(path, "module"),
                    dependencies: parsed.imports,
                }
            })
            .collect();
        units.iter().collect()
    }

    const ORDER_SERVICE: &str = "\
package com.acme.module.order.domain;
import com.acme.module.order.infra.OrderRepoImpl;
public class OrderService {}
";

    const ORDER_REPO: &str = "\
package com.acme.module.order.infra;
import com.acme.module.order.domain.OrderService;
public class OrderRepoImpl {}
";

    #[test]
    fn test_domain_infra_round_trip() {
        let graph = build(&[
            ("com/acme/module/order/domain/OrderService.java", ORDER_SERVICE),
            ("com/acme/module/order/infra/OrderRepoImpl.java", ORDER_REPO),
        ]);

        assert_eq!(graph.edge_count(), 2);

        let cycles = detect_cycles(&graph);
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].len(), 2);

        let violations = detect_violations(&graph);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].source_class, "com.acme.module.order.domain.OrderService");
        assert_eq!(violations[0].kind, ViolationKind::DomainDependsOnInfra);
        assert_eq!(violations[1].kind, ViolationKind::LayerInversion);
        assert_eq!(violations[1].source_layer, Layer::Infrastructure);
    }

    #[test]
    fn test_acyclic_layered_tree_is_clean() {
        let graph = build(&[
            (
                "com/acme/module/order/intf/OrderController.java",
                "package com.acme.module.order.intf;\nimport com.acme.module.order.app.OrderApp;\n",
            ),
            (
                "com/acme/module/order/app/OrderApp.java",
                "package com.acme.module.order.app;\nimport com.acme.module.order.domain.Order;\n",
            ),
            (
                "com/acme/module/order/domain/Order.java",
                "package com.acme.module.order.domain;\nimport java.util.List;\n",
            ),
        ]);
        assert!(detect_cycles(&graph).is_empty());
        assert!(detect_violations(&graph).is_empty());
    }

    #[test]
    fn test_external_imports_never_become_nodes() {
        let graph = build(&[(
            "com/acme/module/order/domain/Order.java",
            "package com.acme.module.order.domain;\nimport org.springframework.Bean;\nimport com.acme.module.shared.Missing;\n",
        )]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.layer_of("com.acme.module.shared.Missing"), Layer::Unknown);
        assert!(detect_violations(&graph).is_empty());
    }

    #[test]
    fn test_repeated_runs_agree() {
        let files = [
            ("com/acme/module/order/domain/OrderService.java", ORDER_SERVICE),
            ("com/acme/module/order/infra/OrderRepoImpl.java", ORDER_REPO),
        ];
        let first = build(&files);
        let second = build(&files);
        assert_eq!(detect_cycles(&first), detect_cycles(&second));
        assert_eq!(detect_violations(&first), detect_violations(&second));
    }
}
