//! Properties of the format pipeline and the request codec, checked with
//! fake engines against real project directories.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use pyfix_config::FormatterId;
use pyfix_core::{FormatPipeline, Request, RunOrder};
use pyfix_engine::FormatContext;
use pyfix_fs::{NormalizedPath, find_project_root};
use pyfix_test_utils::{CallLog, TestProject, fake_engines, logged_engines};
use rstest::rstest;
use serde_json::Value;

/// Which configuration files a generated project carries.
#[derive(Debug, Clone, Copy)]
struct Layout {
    tool_black: bool,
    tool_isort: bool,
    isort_cfg: bool,
    setup_cfg: bool,
}

impl Layout {
    fn build(self) -> TestProject {
        let project = TestProject::new();
        project.init_git();

        let mut pyproject = String::from("[project]\nname = \"demo\"\n");
        if self.tool_black {
            pyproject.push_str("\n[tool.black]\nline-length = 100\n");
        }
        if self.tool_isort {
            pyproject.push_str("\n[tool.isort]\nprofile = \"black\"\n");
        }
        project.pyproject(&pyproject);

        if self.isort_cfg {
            project.isort_cfg("[settings]\nprofile = black\n");
        }
        if self.setup_cfg {
            project.setup_cfg("[metadata]\nname = demo\n\n[isort]\nline_length = 100\n");
        }
        project
    }

    fn isort_configured(self) -> bool {
        self.tool_isort || self.isort_cfg || self.setup_cfg
    }
}

fn layout_strategy() -> impl Strategy<Value = Layout> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(tool_black, tool_isort, isort_cfg, setup_cfg)| Layout {
            tool_black,
            tool_isort,
            isort_cfg,
            setup_cfg,
        },
    )
}

fn context_for(project: &TestProject) -> FormatContext {
    let file = project.path("pkg/mod.py");
    let root = find_project_root(Some(file.as_path()), project.root());
    FormatContext::new(root, Some(file))
}

fn apply(project: &TestProject, text: &str, order: RunOrder) -> String {
    let engines = fake_engines();
    FormatPipeline::new(&engines)
        .apply(text.to_string(), order, false, &context_for(project))
        .unwrap()
}

/// Sources covering import blocks, blank lines and quoting.
const SOURCES: [&str; 6] = [
    "import b\nimport a\nx = 1\n",
    "import os, sys\n\n\ndef f():\n    return 'x'\n",
    "from z import y\nimport a\nimport a\n",
    "x = 1\n\n\ny = 2\n",
    "\nimport c\n\nimport b\nprint('hi')\n",
    "",
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn both_formatters_run_without_policy(layout in layout_strategy(), black_first in any::<bool>()) {
        let project = layout.build();
        let log = CallLog::new();
        let engines = logged_engines(&log);
        let order = RunOrder::from(black_first);

        FormatPipeline::new(&engines)
            .apply(SOURCES[0].to_string(), order, false, &context_for(&project))
            .unwrap();

        prop_assert_eq!(log.formatters(), order.passes().to_vec());
    }

    #[test]
    fn policy_runs_exactly_the_configured_formatters(layout in layout_strategy()) {
        let project = layout.build();
        let log = CallLog::new();
        let engines = logged_engines(&log);

        FormatPipeline::new(&engines)
            .apply(SOURCES[0].to_string(), RunOrder::BlackThenIsort, true, &context_for(&project))
            .unwrap();

        let mut expected = Vec::new();
        if layout.tool_black {
            expected.push(FormatterId::Black);
        }
        if layout.isort_configured() {
            expected.push(FormatterId::Isort);
        }
        prop_assert_eq!(log.formatters(), expected);
    }

    #[test]
    fn policy_without_any_config_is_identity(source in ".*", black_first in any::<bool>()) {
        let project = TestProject::new();
        let context = FormatContext::new(NormalizedPath::new(project.root()), None);
        let engines = fake_engines();

        let out = FormatPipeline::new(&engines)
            .apply(source.clone(), RunOrder::from(black_first), true, &context)
            .unwrap();
        prop_assert_eq!(out, source);
    }

    #[test]
    fn requests_survive_serialization(
        operation in "[a-z]{1,8}",
        file_path in proptest::option::of("/[a-z]{1,8}(/[a-z]{1,8}){0,3}\\.pyi?"),
        require in any::<bool>(),
        arguments in proptest::collection::btree_map("[a-z_]{1,10}", "[ -~]{0,20}", 0..5),
    ) {
        let mut request = Request::new(operation).with_require_present_config(require);
        if let Some(path) = file_path {
            request = request.with_file_path(path);
        }
        for (key, value) in arguments.into_iter().filter(|(k, _)| k != "cmd") {
            request = request.with_argument(key, Value::String(value));
        }

        let decoded = Request::decode(&request.to_json().unwrap()).unwrap();
        prop_assert_eq!(decoded, request);
    }
}

#[test]
fn passes_do_not_commute() {
    let project = Layout {
        tool_black: false,
        tool_isort: false,
        isort_cfg: false,
        setup_cfg: false,
    }
    .build();

    let black_first = apply(&project, SOURCES[0], RunOrder::BlackThenIsort);
    let isort_first = apply(&project, SOURCES[0], RunOrder::IsortThenBlack);

    assert_eq!(black_first, "import a\nimport b\n\nx = 1\n");
    assert_eq!(isort_first, "import a\nimport b\nx = 1\n");
}

#[rstest]
fn pipeline_is_idempotent(
    #[values(0, 1, 2, 3, 4, 5)] index: usize,
    #[values(RunOrder::BlackThenIsort, RunOrder::IsortThenBlack)] order: RunOrder,
) {
    let project = TestProject::new();
    let once = apply(&project, SOURCES[index], order);
    let twice = apply(&project, &once, order);
    assert_eq!(twice, once, "source {index:?}, {order:?}");
}

#[test]
fn configured_options_reach_both_engines() {
    let project = Layout {
        tool_black: true,
        tool_isort: false,
        isort_cfg: false,
        setup_cfg: true,
    }
    .build();
    let log = CallLog::new();
    let engines = logged_engines(&log);

    FormatPipeline::new(&engines)
        .apply(SOURCES[0].to_string(), RunOrder::BlackThenIsort, false, &context_for(&project))
        .unwrap();

    let calls = log.calls();
    assert_eq!(
        calls[0].config.get("line_length").and_then(|v| v.as_integer()),
        Some(100)
    );
    assert_eq!(
        calls[1].config.get("line_length").and_then(|v| v.as_str()),
        Some("100")
    );
    assert_eq!(
        calls[1].config.source.as_ref().and_then(|p| p.file_name()),
        Some("setup.cfg")
    );
}
