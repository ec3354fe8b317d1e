use percent_encoding::percent_decode_str;

/// 归一化 href 返回的路径，三步按固定顺序执行：
///
/// 1. 百分号解码（解出非法 UTF-8 时保留原文，不算错误）
/// 2. 剥掉与 base_path 重叠的前缀（部分服务器会把挂载前缀回显在每个 href 里）
/// 3. 去掉单个前导 `/`
pub fn normalize_path(raw_path: &str, base_path: Option<&str>) -> String {
    let mut path = match percent_decode_str(raw_path).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw_path.to_string(),
    };

    if let Some(base_path) = base_path {
        path = strip_base_overlap(path, base_path);
    }

    // 只去一个前导分隔符，不循环
    if let Some(rest) = path.strip_prefix('/') {
        path = rest.to_string();
    }

    path
}

/// 从左到右找 base_path 最早的一个后缀，使其恰好是 path 的前缀，命中即剥掉并停止
///
/// 路径为空或没有任何后缀命中（包括 base_path 为空串）时原样返回。
fn strip_base_overlap(path: String, base_path: &str) -> String {
    let Some(first) = path.chars().next() else {
        return path;
    };

    for (i, c) in base_path.char_indices() {
        if c != first {
            continue;
        }
        if let Some(rest) = path.strip_prefix(&base_path[i..]) {
            return rest.to_string();
        }
    }

    path
}
