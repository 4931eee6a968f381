//! Portal 操作消息

/// 用户对 portal 的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalMessage {
    /// "Connect to Wallet"
    Connect,
    /// 一次性创建列表账户
    Initialize,
    /// 编辑输入框
    Input(InputEdit),
    /// 提交输入框中的链接
    Submit,
}

/// 输入框编辑
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdit {
    Push(char),
    Pop,
    Clear,
}

impl InputEdit {
    pub fn apply(self, input: &mut String) {
        match self {
            Self::Push(c) => input.push(c),
            Self::Pop => {
                input.pop();
            }
            Self::Clear => input.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_apply_in_order() {
        let mut input = String::new();
        for edit in [
            InputEdit::Push('a'),
            InputEdit::Push('✨'),
            InputEdit::Push('b'),
            InputEdit::Pop,
        ] {
            edit.apply(&mut input);
        }
        assert_eq!(input, "a✨");

        InputEdit::Clear.apply(&mut input);
        assert_eq!(input, "");
        InputEdit::Pop.apply(&mut input);
        assert_eq!(input, "");
    }
}
