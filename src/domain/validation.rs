//! 入力値の検証（純粋関数）
//!
//! どの関数も不正な入力に対しては`false`を返す（fail closed）。
//! 副作用はない。

/// ISBN-13の桁数（ハイフン除去後）
pub const ISBN_LENGTH: usize = 13;

/// 利用者IDの既定桁数
pub const DEFAULT_USER_ID_LENGTH: usize = 9;

/// 名前の区切り文字として許可される記号
const NAME_SEPARATORS: [char; 4] = ['-', '\'', ' ', '.'];

/// ISBN-13として有効か判定する
///
/// ルール：
/// - ハイフンを除去した後、ちょうど13桁の数字であること
/// - 重み1,3を交互に掛けた合計が10で割り切れること（チェックディジット）
pub fn is_valid_isbn(isbn: &str) -> bool {
    let Some(digits) = isbn
        .chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()
    else {
        return false;
    };

    if digits.len() != ISBN_LENGTH {
        return false;
    }

    let checksum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();

    checksum % 10 == 0
}

/// 既定の桁数で利用者IDを検証する
pub fn is_valid_user_id(user_id: &str) -> bool {
    has_user_id_format(user_id, DEFAULT_USER_ID_LENGTH)
}

/// 利用者IDが指定桁数の数字のみで構成されているか判定する
pub fn has_user_id_format(user_id: &str, length: usize) -> bool {
    user_id.len() == length && user_id.bytes().all(|b| b.is_ascii_digit())
}

/// 人名・著者名として有効か判定する
///
/// ルール：
/// - 空でないこと
/// - 先頭と末尾は文字であること
/// - 文字と区切り記号（`-` `'` 空白 `.`）以外を含まないこと
/// - 区切り記号が連続しないこと（ただしイニシャルの`. `は許可）
pub fn is_valid_name(name: &str) -> bool {
    let chars: Vec<char> = name.chars().collect();

    let (Some(first), Some(last)) = (chars.first(), chars.last()) else {
        return false;
    };

    if !first.is_alphabetic() || !last.is_alphabetic() {
        return false;
    }

    if !chars.iter().all(|c| c.is_alphabetic() || is_separator(*c)) {
        return false;
    }

    chars.windows(2).all(|pair| match (pair[0], pair[1]) {
        ('.', ' ') => true,
        (a, b) => !(is_separator(a) && is_separator(b)),
    })
}

fn is_separator(c: char) -> bool {
    NAME_SEPARATORS.contains(&c)
}
