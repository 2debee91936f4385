//! Starter global rule files written by `init`, one per tech category.

use crate::domain::TechCategory;

/// Markdown body of `global/<stem>_rules.md` for a tech stack.
pub fn global_rule_file(category: TechCategory, tech: &str) -> String {
    let mut lines: Vec<&str> = match category {
        TechCategory::Php => vec![
            "# PHP 开发规范与最佳实践",
            "",
            "## 基础规则",
            "- 遵循 PSR-12 代码规范",
            "- 所有 PHP 文件必须以 <?php 开头，不使用关闭标签 ?>",
            "- 使用 4 个空格缩进，不使用 Tab",
            "- 行宽不超过 120 字符",
            "",
            "## 文件组织",
            "- 类名与文件名保持一致，使用 PascalCase",
            "- 函数名与方法名使用 camelCase",
            "- 常量名使用全大写加下划线",
            "- 目录结构遵循 PSR-4 自动加载标准",
            "",
            "## 注释与文档",
            "- 公共方法必须写 PHPDoc，包括 @param 和 @return",
            "- 代码逻辑复杂处需要行内注释",
            "",
            "## 安全与实践",
            "- 避免使用 mysql_*，统一使用 PDO 或框架自带的数据库层",
            "- 避免硬编码敏感信息，使用配置文件或环境变量",
            "- 异常处理要用 try/catch，不允许裸 die/exit",
            "",
            "## 测试",
            "- 所有新类必须配套 PHPUnit 单元测试",
            "- 测试文件放在 tests/ 目录下",
        ],
        TechCategory::Go => vec![
            "# Go 开发规范与最佳实践",
            "",
            "## 代码规范",
            "- 使用 gofmt 格式化代码",
            "- 遵循 Go 官方命名约定",
            "- 使用 go mod 管理依赖",
            "- 包名使用小写字母",
            "- 接口名以 er 结尾",
            "",
            "## 错误处理",
            "- 始终检查错误返回值",
            "- 使用 errors.Wrap 包装错误",
            "- 避免忽略错误",
            "- 自定义错误类型实现 Error() 方法",
            "",
            "## 性能优化",
            "- 使用 sync.Pool 复用对象",
            "- 避免在循环中分配内存",
            "- 使用 strings.Builder 进行字符串拼接",
            "- 合理使用 goroutine 和 channel",
        ],
        TechCategory::Java => vec![
            "# Java 开发规范与最佳实践",
            "",
            "## 代码规范",
            "- 遵循 Java 命名约定",
            "- 使用 Lombok 减少样板代码",
            "- 启用代码检查工具",
            "- 类名使用 PascalCase",
            "- 方法名使用 camelCase",
            "",
            "## Spring Boot 规范",
            "- 使用 Spring Boot 自动配置",
            "- 遵循 RESTful API 设计原则",
            "- 使用 Spring Security 进行安全控制",
            "- 使用 Spring Data JPA 进行数据访问",
        ],
        TechCategory::Python => vec![
            "# Python 开发规范与最佳实践",
            "",
            "## 代码规范",
            "- 遵循 PEP 8 规范",
            "- 使用类型提示",
            "- 使用虚拟环境管理依赖",
            "- 函数名和变量名使用 snake_case",
            "- 类名使用 PascalCase",
            "",
            "## 最佳实践",
            "- 使用 list comprehension 和 generator",
            "- 使用 with 语句管理资源",
            "- 使用 dataclass 简化类定义",
            "- 编写 docstring 文档",
        ],
        TechCategory::Node => vec![
            "# Node.js 开发规范与最佳实践",
            "",
            "## 安全规范",
            "- 使用 helmet 中间件",
            "- 验证所有输入",
            "- 使用 bcrypt 加密密码",
            "- 定期更新依赖",
            "- 使用 HTTPS",
            "",
            "## 代码规范",
            "- 使用 ESLint 进行代码检查",
            "- 使用 Prettier 格式化代码",
            "- 遵循异步编程最佳实践",
            "- 使用 async/await 而不是回调",
        ],
        TechCategory::Frontend => vec![
            "# 前端开发规范与最佳实践",
            "",
            "## 安全规范",
            "- 使用 HTTPS",
            "- 验证用户输入",
            "- 防止 XSS 攻击",
            "- 使用 CSP 策略",
            "- 避免在客户端存储敏感信息",
            "",
            "## 代码规范",
            "- 使用 ESLint 和 Prettier",
            "- 遵循组件化开发原则",
            "- 使用 TypeScript 进行类型检查",
            "- 编写单元测试",
        ],
        TechCategory::Database => vec![
            "# 数据库开发规范与最佳实践",
            "",
            "## 安全规范",
            "- 使用参数化查询防止 SQL 注入",
            "- 限制数据库用户权限",
            "- 定期备份数据",
            "- 加密敏感数据",
            "",
            "## 性能优化",
            "- 合理设计索引",
            "- 避免 SELECT *",
            "- 使用连接池",
            "- 定期分析慢查询",
        ],
        TechCategory::Cache => vec![
            "# 缓存使用规范与最佳实践",
            "",
            "## 使用规范",
            "- 设置合理的过期时间",
            "- 避免缓存穿透",
            "- 使用缓存预热",
            "- 监控缓存命中率",
            "",
            "## 注意事项",
            "- 缓存数据一致性",
            "- 缓存雪崩防护",
            "- 合理设置内存限制",
            "- 定期清理过期数据",
        ],
        TechCategory::DevOps => vec![
            "# DevOps 规范与最佳实践",
            "",
            "## 容器安全",
            "- 使用非 root 用户运行容器",
            "- 定期更新基础镜像",
            "- 扫描镜像漏洞",
            "- 限制容器权限",
            "",
            "## 部署规范",
            "- 使用 CI/CD 流水线",
            "- 自动化测试",
            "- 蓝绿部署或金丝雀发布",
            "- 监控和日志收集",
        ],
    };

    if category == TechCategory::Php && tech.contains("Laravel") {
        lines.extend([
            "",
            "## Laravel 特定规范",
            "- 使用 Eloquent ORM 进行数据库操作",
            "- 遵循 MVC 架构模式",
            "- 使用 Artisan 命令生成代码",
            "- 启用 CSRF 保护",
            "- 使用 Laravel 的验证器进行数据验证",
            "- 使用 Laravel 的缓存系统",
        ]);
    }

    let mut body = lines.join("\n");
    body.push('\n');
    body
}

#[cfg(test)]
mod tests {
    use super::global_rule_file;
    use crate::domain::TechCategory;
    use crate::parse::parse_global_file;

    #[test]
    fn templates_parse_back_into_rules() {
        let body = global_rule_file(TechCategory::Go, "Go+Gin");
        let rules = parse_global_file(&body, "go_rules.md");
        assert_eq!(rules.len(), 3);
        assert!(rules.iter().all(|r| r.tags.first().map(String::as_str) == Some("go")));
    }

    #[test]
    fn laravel_section_is_appended_only_for_laravel() {
        let slim = global_rule_file(TechCategory::Php, "PHP+Slim");
        let laravel = global_rule_file(TechCategory::Php, "PHP+Laravel");
        assert!(!slim.contains("Laravel 特定规范"));
        assert!(laravel.contains("## Laravel 特定规范"));
        assert_eq!(parse_global_file(&laravel, "php_rules.md").len(), 6);
    }
}
