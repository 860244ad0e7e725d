//! 確認プロンプトモジュール

use std::io::{self, BufRead, IsTerminal};

/// はい/いいえの確認を行う
pub trait Confirmer {
    /// 確認を求め、承認されたらtrueを返す
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// 端末（標準入力）で確認を行う
#[derive(Debug, Default)]
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        if io::stdin().is_terminal() {
            return dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .map_err(|e| io::Error::other(e.to_string()));
        }

        // パイプ入力の場合は1行読んで判定
        eprint!("{} [y/N] ", prompt);
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(is_yes(&line))
    }
}

/// 入力が承認を表すか
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y\n"));
        assert!(is_yes("Y"));
        assert!(is_yes("  yes  "));
        assert!(is_yes("YES\r\n"));
    }

    #[test]
    fn test_is_not_yes() {
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("no"));
        assert!(!is_yes("yep"));
    }
}
