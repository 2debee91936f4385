//! Built-in rules: project fallbacks, global baseline and per-technology
//! risk avoidance rules.

use crate::domain::{Rule, RuleType, TechCategory};

/// Substituted when a project directory yields no rules at all.
pub fn project_fallback_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "代码规范",
            "项目代码编写规范和要求",
            RuleType::CodeStyle,
            "函数命名采用 snake_case，每行代码不超过 80 字符",
            4,
        )
        .with_tags(["code", "style", "naming"]),
        Rule::new(
            "安全约束",
            "项目安全相关的要求和约束",
            RuleType::Security,
            "敏感数据（如密码）需加密存储",
            5,
        )
        .with_tags(["security", "encryption"]),
    ]
}

/// Synthetic rule summarizing the declared tech stacks.
pub fn tech_stack_rule(tech_stacks: &[String]) -> Rule {
    Rule::new(
        "技术栈规范",
        "项目使用的技术栈和版本要求",
        RuleType::TechStack,
        format!("技术栈: {}", tech_stacks.join(", ")),
        5,
    )
    .with_tags(["tech", "stack"])
}

/// Always present at the head of the global rules.
pub fn global_baseline_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "通用命名规范",
            "适用于所有项目的通用命名规范",
            RuleType::Naming,
            "变量和函数名应具有描述性，避免使用缩写",
            3,
        )
        .with_tags(["naming", "general"]),
        Rule::new(
            "代码注释规范",
            "代码注释的编写规范",
            RuleType::Documentation,
            "所有公共函数和复杂逻辑都应添加注释",
            3,
        )
        .with_tags(["documentation", "comments"]),
        Rule::new(
            "错误处理规范",
            "错误处理的标准做法",
            RuleType::ErrorHandling,
            "所有可能失败的操作都应进行错误处理",
            4,
        )
        .with_tags(["error", "handling"]),
    ]
}

/// Risk avoidance rules for every recognised tech stack, in declaration order.
pub fn tech_specific_rules(tech_stacks: &[String]) -> Vec<Rule> {
    tech_stacks
        .iter()
        .filter_map(|tech| TechCategory::classify(tech).map(|category| (tech, category)))
        .flat_map(|(tech, category)| rules_for(category, tech))
        .collect()
}

fn rules_for(category: TechCategory, tech: &str) -> Vec<Rule> {
    match category {
        TechCategory::Php => {
            let mut rules = vec![
                Rule::new(
                    "PHP安全规范",
                    "PHP开发中的安全注意事项和规避规则",
                    RuleType::Security,
                    "使用 PDO 预处理语句防止 SQL 注入，验证所有用户输入，使用 password_hash() 加密密码",
                    5,
                )
                .with_tags(["security", "php", "sql-injection"]),
                Rule::new(
                    "PHP性能优化",
                    "PHP性能优化的关键规则",
                    RuleType::Performance,
                    "启用 OPcache，使用 Composer 自动加载，避免在循环中执行数据库查询",
                    4,
                )
                .with_tags(["performance", "php", "optimization"]),
            ];
            if tech.contains("Laravel") {
                rules.push(
                    Rule::new(
                        "Laravel最佳实践",
                        "Laravel框架开发的最佳实践",
                        RuleType::Framework,
                        "使用 Eloquent ORM，遵循 MVC 模式，使用 Artisan 命令，启用 CSRF 保护",
                        4,
                    )
                    .with_tags(["framework", "laravel", "best-practices"]),
                );
            }
            rules
        }
        TechCategory::Go => vec![
            Rule::new(
                "Go代码规范",
                "Go语言开发的标准规范",
                RuleType::CodeStyle,
                "使用 gofmt 格式化代码，遵循 Go 官方命名约定，使用 go mod 管理依赖",
                4,
            )
            .with_tags(["code_style", "go", "golang"]),
            Rule::new(
                "Go错误处理",
                "Go语言错误处理的最佳实践",
                RuleType::ErrorHandling,
                "始终检查错误返回值，使用 errors.Wrap 包装错误，避免忽略错误",
                5,
            )
            .with_tags(["error_handling", "go", "best-practices"]),
        ],
        TechCategory::Java => vec![Rule::new(
            "Java代码规范",
            "Java开发的标准规范",
            RuleType::CodeStyle,
            "遵循 Java 命名约定，使用 Lombok 减少样板代码，启用代码检查工具",
            4,
        )
        .with_tags(["code_style", "java", "spring"])],
        TechCategory::Python => vec![Rule::new(
            "Python代码规范",
            "Python开发的标准规范",
            RuleType::CodeStyle,
            "遵循 PEP 8 规范，使用类型提示，使用虚拟环境管理依赖",
            4,
        )
        .with_tags(["code_style", "python", "pep8"])],
        TechCategory::Node => vec![Rule::new(
            "Node.js安全规范",
            "Node.js开发中的安全注意事项",
            RuleType::Security,
            "使用 helmet 中间件，验证所有输入，使用 bcrypt 加密密码，定期更新依赖",
            5,
        )
        .with_tags(["security", "nodejs", "express"])],
        TechCategory::Frontend => vec![Rule::new(
            "前端安全规范",
            "前端开发中的安全注意事项",
            RuleType::Security,
            "使用 HTTPS，验证用户输入，防止 XSS 攻击，使用 CSP 策略",
            5,
        )
        .with_tags(["security", "frontend", "xss"])],
        TechCategory::Database => vec![Rule::new(
            "数据库安全规范",
            "数据库操作的安全注意事项",
            RuleType::Security,
            "使用参数化查询防止 SQL 注入，限制数据库用户权限，定期备份数据",
            5,
        )
        .with_tags(["security", "database", "sql-injection"])],
        TechCategory::Cache => vec![Rule::new(
            "缓存使用规范",
            "缓存系统使用的最佳实践",
            RuleType::Performance,
            "设置合理的过期时间，避免缓存穿透，使用缓存预热，监控缓存命中率",
            4,
        )
        .with_tags(["performance", "cache", "redis"])],
        TechCategory::DevOps => vec![Rule::new(
            "容器安全规范",
            "容器化部署的安全注意事项",
            RuleType::Security,
            "使用非 root 用户运行容器，定期更新基础镜像，扫描镜像漏洞，限制容器权限",
            5,
        )
        .with_tags(["security", "docker", "kubernetes"])],
    }
}
