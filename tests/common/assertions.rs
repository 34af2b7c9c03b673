//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(result: Result<T, E>, expected_msg: &str) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 断言查询文本中以某个关键字开头的行恰好出现指定次数
pub fn assert_clause_count(text: &str, keyword: &str, expected: usize) {
    let actual = text
        .lines()
        .filter(|line| line.starts_with(keyword))
        .count();
    assert_eq!(
        actual, expected,
        "子句 {} 数量不匹配: 期望 {}, 实际 {}\n{}",
        keyword, expected, actual, text
    );
}

/// 取出以指定关键字开头的那一行
pub fn clause<'a>(text: &'a str, keyword: &str) -> &'a str {
    text.lines()
        .find(|line| line.starts_with(keyword))
        .unwrap_or_else(|| panic!("查询中没有 {} 子句:\n{}", keyword, text))
}
