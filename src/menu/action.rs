#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    SelectCategory(usize),
    CycleCategory(i32),
    MoveSelection(i32),
    OpenImage(usize),
    OpenSelectedImage,
    CloseModal,
    AppendToInput(char),
    DeleteFromInput,
    RemoveLastWord,
    ClearInput,
    ToggleHelp,
    Exit,
    Nop,
}
